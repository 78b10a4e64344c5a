// src/expr/eval.rs
use std::collections::HashMap;

use rayon::prelude::*;
use thiserror::Error;

use crate::bands::BandRole;
use crate::utils::band_data::BandData;

use super::{Expr, Func};

/// Failures while binding or combining pixel buffers. These become
/// per-index skip entries upstream; they never abort a batch.
///
/// Pixel-level numeric edge cases are not errors: division by zero and
/// friends follow IEEE float semantics (NaN/inf) and propagate as
/// no-data through the output band.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("band shape mismatch: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
    #[error("role {0} is not bound to a band")]
    UnboundRole(BandRole),
    #[error("parameter '{0}' has no value")]
    UnboundParam(String),
    #[error("formula reduced to a scalar, not a band")]
    ScalarResult,
}

enum Value {
    Scalar(f32),
    Band(BandData),
}

/// Evaluate a parsed formula against bound bands and parameter values.
/// Scalars broadcast over bands; band/band operations require matching
/// shapes.
pub fn evaluate(
    expr: &Expr,
    roles: &HashMap<BandRole, BandData>,
    params: &HashMap<String, f32>,
) -> Result<BandData, EvalError> {
    match eval(expr, roles, params)? {
        Value::Band(band) => Ok(band),
        // Unreachable for registry formulas (required_roles is never
        // empty), but the evaluator does not rely on that.
        Value::Scalar(_) => Err(EvalError::ScalarResult),
    }
}

fn eval(
    expr: &Expr,
    roles: &HashMap<BandRole, BandData>,
    params: &HashMap<String, f32>,
) -> Result<Value, EvalError> {
    match expr {
        Expr::Num(n) => Ok(Value::Scalar(*n)),
        Expr::Role(role) => roles
            .get(role)
            .cloned()
            .map(Value::Band)
            .ok_or(EvalError::UnboundRole(*role)),
        Expr::Param(name) => params
            .get(name)
            .copied()
            .map(Value::Scalar)
            .ok_or_else(|| EvalError::UnboundParam(name.clone())),
        Expr::Neg(inner) => match eval(inner, roles, params)? {
            Value::Scalar(v) => Ok(Value::Scalar(-v)),
            Value::Band(band) => Ok(Value::Band(map_band(&band, |v| -v))),
        },
        Expr::BinOp { op, left, right } => {
            let l = eval(left, roles, params)?;
            let r = eval(right, roles, params)?;
            combine(*op, l, r)
        }
        Expr::Call(func, args) => match func {
            Func::Min | Func::Max => {
                let a = eval(&args[0], roles, params)?;
                let b = eval(&args[1], roles, params)?;
                let f: fn(f32, f32) -> f32 = match func {
                    Func::Min => f32::min,
                    _ => f32::max,
                };
                combine_with(a, b, f)
            }
            Func::Abs | Func::Exp | Func::Sqrt => {
                let f: fn(f32) -> f32 = match func {
                    Func::Abs => f32::abs,
                    Func::Exp => f32::exp,
                    _ => f32::sqrt,
                };
                match eval(&args[0], roles, params)? {
                    Value::Scalar(v) => Ok(Value::Scalar(f(v))),
                    Value::Band(band) => Ok(Value::Band(map_band(&band, f))),
                }
            }
        },
    }
}

fn combine(op: char, l: Value, r: Value) -> Result<Value, EvalError> {
    combine_with(l, r, move |a, b| apply(op, a, b))
}

fn combine_with<F>(l: Value, r: Value, f: F) -> Result<Value, EvalError>
where
    F: Fn(f32, f32) -> f32 + Send + Sync,
{
    match (l, r) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(f(a, b))),
        (Value::Band(a), Value::Scalar(b)) => Ok(Value::Band(map_band(&a, |v| f(v, b)))),
        (Value::Scalar(a), Value::Band(b)) => Ok(Value::Band(map_band(&b, |v| f(a, v)))),
        (Value::Band(a), Value::Band(b)) => zip_bands(&a, &b, f).map(Value::Band),
    }
}

fn apply(op: char, a: f32, b: f32) -> f32 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        '/' => a / b,
        _ => f32::NAN,
    }
}

fn map_band<F>(band: &BandData, f: F) -> BandData
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    let src = band.data();
    let mut out = vec![0.0f32; src.len()];
    out.par_iter_mut()
        .enumerate()
        .for_each(|(i, dst)| *dst = f(src[i]));
    BandData::new(band.shape(), out)
}

fn zip_bands<F>(a: &BandData, b: &BandData, f: F) -> Result<BandData, EvalError>
where
    F: Fn(f32, f32) -> f32 + Send + Sync,
{
    if a.shape() != b.shape() {
        let (aw, ah) = a.shape();
        let (bw, bh) = b.shape();
        return Err(EvalError::ShapeMismatch(aw, ah, bw, bh));
    }

    let a_data = a.data();
    let b_data = b.data();
    let mut out = vec![0.0f32; a_data.len()];
    out.par_iter_mut()
        .enumerate()
        .for_each(|(i, dst)| *dst = f(a_data[i], b_data[i]));
    Ok(BandData::new(a.shape(), out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;

    fn roles_of(pairs: &[(BandRole, &[f32])]) -> HashMap<BandRole, BandData> {
        pairs
            .iter()
            .map(|(role, values)| (*role, BandData::new((values.len(), 1), values.to_vec())))
            .collect()
    }

    #[test]
    fn ndvi_known_values() {
        let roles = roles_of(&[
            (BandRole::Nir, &[5000.0, 3000.0, 1000.0]),
            (BandRole::Red, &[2500.0, 3000.0, 500.0]),
        ]);
        let expr = parse("(N - R)/(N + R)", &[]).unwrap();
        let out = evaluate(&expr, &roles, &HashMap::new()).unwrap();
        assert!((out.data()[0] - 0.33333).abs() < 0.001);
        assert!(out.data()[1].abs() < 1e-6);
        assert!((out.data()[2] - 0.33333).abs() < 0.001);
    }

    #[test]
    fn scalar_broadcast_and_params() {
        let roles = roles_of(&[
            (BandRole::Nir, &[0.8]),
            (BandRole::Red, &[0.2]),
        ]);
        let mut params = HashMap::new();
        params.insert("L".to_string(), 0.5f32);
        let expr = parse("(1.0 + L)*(N - R)/(N + R + L)", &["L"]).unwrap();
        let out = evaluate(&expr, &roles, &params).unwrap();
        // SAVI: 1.5 * 0.6 / 1.5 = 0.6
        assert!((out.data()[0] - 0.6).abs() < 1e-5);
    }

    #[test]
    fn division_by_zero_propagates_nonfinite() {
        let roles = roles_of(&[
            (BandRole::Nir, &[0.0, 1.0]),
            (BandRole::Red, &[0.0, -1.0]),
        ]);
        let expr = parse("(N - R)/(N + R)", &[]).unwrap();
        let out = evaluate(&expr, &roles, &HashMap::new()).unwrap();
        assert!(out.data()[0].is_nan()); // 0/0
        assert!(out.data()[1].is_infinite()); // 2/0
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        let roles = roles_of(&[(BandRole::Nir, &[-1.0])]);
        let expr = parse("sqrt(N)", &[]).unwrap();
        let out = evaluate(&expr, &roles, &HashMap::new()).unwrap();
        assert!(out.data()[0].is_nan());
    }

    #[test]
    fn min_max_abs() {
        let roles = roles_of(&[
            (BandRole::Nir, &[3.0, -2.0]),
            (BandRole::Red, &[1.0, 5.0]),
        ]);
        let expr = parse("min(N, R)", &[]).unwrap();
        let out = evaluate(&expr, &roles, &HashMap::new()).unwrap();
        assert_eq!(out.data(), &[1.0, -2.0]);

        let expr = parse("max(abs(N), R)", &[]).unwrap();
        let out = evaluate(&expr, &roles, &HashMap::new()).unwrap();
        assert_eq!(out.data(), &[3.0, 5.0]);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let mut roles = HashMap::new();
        roles.insert(BandRole::Nir, BandData::filled((2, 2), 1.0));
        roles.insert(BandRole::Red, BandData::filled((3, 3), 1.0));
        let expr = parse("N - R", &[]).unwrap();
        let err = evaluate(&expr, &roles, &HashMap::new()).unwrap_err();
        assert!(matches!(err, EvalError::ShapeMismatch(2, 2, 3, 3)));
    }

    #[test]
    fn unbound_role_is_an_error() {
        let expr = parse("N - R", &[]).unwrap();
        let roles = roles_of(&[(BandRole::Nir, &[1.0])]);
        let err = evaluate(&expr, &roles, &HashMap::new()).unwrap_err();
        assert_eq!(err, EvalError::UnboundRole(BandRole::Red));
    }
}
