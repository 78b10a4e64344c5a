// src/registry/mod.rs
mod catalog;

use std::collections::HashMap;
use std::fmt;

use crate::bands::BandRole;
use crate::error::CalcError;
use crate::expr::{self, Expr};

/// Application domain of an index, used for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Vegetation,
    Water,
    Snow,
    Burn,
    Soil,
    Urban,
}

impl IndexKind {
    pub fn parse(s: &str) -> Option<IndexKind> {
        match s.to_ascii_lowercase().as_str() {
            "vegetation" => Some(IndexKind::Vegetation),
            "water" => Some(IndexKind::Water),
            "snow" => Some(IndexKind::Snow),
            "burn" => Some(IndexKind::Burn),
            "soil" => Some(IndexKind::Soil),
            "urban" => Some(IndexKind::Urban),
            _ => None,
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IndexKind::Vegetation => "vegetation",
            IndexKind::Water => "water",
            IndexKind::Snow => "snow",
            IndexKind::Burn => "burn",
            IndexKind::Soil => "soil",
            IndexKind::Urban => "urban",
        };
        f.write_str(s)
    }
}

/// A raw catalog row before validation.
pub(crate) struct CatalogEntry {
    pub name: &'static str,
    pub long_name: &'static str,
    pub kind: IndexKind,
    pub formula: &'static str,
    pub params: &'static [(&'static str, f32)],
    pub domain: (f32, f32),
}

/// A validated index definition. Immutable once the registry is built;
/// the parsed expression and the roles derived from it are fixed for the
/// life of the process.
#[derive(Debug, Clone)]
pub struct IndexDefinition {
    name: &'static str,
    long_name: &'static str,
    kind: IndexKind,
    formula: &'static str,
    expr: Expr,
    required_roles: Vec<BandRole>,
    params: &'static [(&'static str, f32)],
    domain: (f32, f32),
}

impl IndexDefinition {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn long_name(&self) -> &'static str {
        self.long_name
    }

    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    pub fn formula(&self) -> &'static str {
        self.formula
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Roles the formula references, in first-appearance order. Derived
    /// from the parsed formula, never written by hand.
    pub fn required_roles(&self) -> &[BandRole] {
        &self.required_roles
    }

    /// Parameter names with their default values.
    pub fn params(&self) -> &'static [(&'static str, f32)] {
        self.params
    }

    /// Typical output value range.
    pub fn domain(&self) -> (f32, f32) {
        self.domain
    }

    /// Default parameter values merged with per-request overrides.
    /// Overrides for parameters this formula does not declare are
    /// ignored; a global `L=0.5` only lands where an `L` exists.
    pub fn resolve_params(&self, overrides: &HashMap<String, f32>) -> HashMap<String, f32> {
        self.params
            .iter()
            .map(|(name, default)| {
                let value = overrides.get(*name).copied().unwrap_or(*default);
                (name.to_string(), value)
            })
            .collect()
    }
}

/// The static index catalog, validated and indexed by name.
///
/// Built once at process start via [`IndexRegistry::builtin`] and passed
/// into the engine; there is no global registry state. Construction
/// fails fast on a corrupt entry: formulas referencing tokens outside
/// the role vocabulary and the entry's declared parameters are authoring
/// bugs, not per-request conditions.
#[derive(Debug)]
pub struct IndexRegistry {
    defs: Vec<IndexDefinition>,
    by_name: HashMap<String, usize>,
}

impl IndexRegistry {
    pub fn builtin() -> Result<Self, CalcError> {
        Self::from_entries(catalog::CATALOG)
    }

    fn from_entries(entries: &[CatalogEntry]) -> Result<Self, CalcError> {
        let mut defs = Vec::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for entry in entries {
            let param_names: Vec<&str> = entry.params.iter().map(|(name, _)| *name).collect();
            let parsed = expr::parse(entry.formula, &param_names).map_err(|source| {
                CalcError::RegistryCorrupt {
                    index: entry.name.to_string(),
                    source,
                }
            })?;
            let required_roles = expr::required_roles(&parsed);
            if required_roles.is_empty() {
                return Err(CalcError::RegistryNoRoles {
                    index: entry.name.to_string(),
                });
            }

            let key = entry.name.to_ascii_uppercase();
            if by_name.insert(key, defs.len()).is_some() {
                return Err(CalcError::DuplicateIndex {
                    index: entry.name.to_string(),
                });
            }
            defs.push(IndexDefinition {
                name: entry.name,
                long_name: entry.long_name,
                kind: entry.kind,
                formula: entry.formula,
                expr: parsed,
                required_roles,
                params: entry.params,
                domain: entry.domain,
            });
        }

        Ok(Self { defs, by_name })
    }

    /// Case-insensitive lookup by index name.
    pub fn lookup(&self, name: &str) -> Option<&IndexDefinition> {
        self.by_name
            .get(&name.to_ascii_uppercase())
            .map(|&i| &self.defs[i])
    }

    /// All definitions in catalog order.
    pub fn list(&self) -> &[IndexDefinition] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
