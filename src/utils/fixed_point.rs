// src/utils/fixed_point.rs

/// Convert index values to scaled int16. Non-finite pixels (NaN/inf from
/// the evaluator) become the nodata sentinel; finite values are clamped
/// just inside [-1, 1] to avoid overflow at the usual 10000 scale.
pub fn to_fixed_point(data: &[f32], scale_factor: i32, nodata_value: i16) -> Vec<i16> {
    data.iter()
        .map(|&value| {
            if !value.is_finite() {
                nodata_value
            } else {
                let clamped = value.max(-0.9999).min(0.9999);
                (clamped * scale_factor as f32).round() as i16
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_and_clamps() {
        let out = to_fixed_point(&[0.5, -0.5, 2.0, -2.0], 10_000, -10_000);
        assert_eq!(out, vec![5000, -5000, 9999, -9999]);
    }

    #[test]
    fn nonfinite_becomes_nodata() {
        let out = to_fixed_point(&[f32::NAN, f32::INFINITY, f32::NEG_INFINITY], 10_000, -10_000);
        assert_eq!(out, vec![-10_000, -10_000, -10_000]);
    }
}
