// src/error.rs
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

use crate::bands::BandRole;
use crate::expr::{EvalError, ExprError};

/// Fatal errors. Everything here aborts the operation that raised it;
/// per-index failures inside a compute request are [`SkipReason`]s
/// instead and never abort the batch.
#[derive(Error, Debug)]
pub enum CalcError {
    /// A registry entry's formula failed validation. Registry entries are
    /// static data checked once at construction, so this is an authoring
    /// bug and is raised immediately rather than deferred to a request.
    #[error("registry entry '{index}' is corrupt: {source}")]
    RegistryCorrupt {
        index: String,
        #[source]
        source: ExprError,
    },

    /// A registry entry's formula references no band role at all.
    #[error("registry entry '{index}' is corrupt: formula references no band role")]
    RegistryNoRoles { index: String },

    #[error("duplicate registry entry '{index}'")]
    DuplicateIndex { index: String },

    #[error("unknown band role '{0}'")]
    UnknownRole(String),
}

/// Why a requested index was skipped. Skips are per index: the rest of
/// the request keeps going and the caller gets these back alongside the
/// successfully computed bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The requested name is not in the registry.
    UnknownIndex,
    /// Required roles that resolved to no band on the image.
    MissingBand(Vec<BandRole>),
    /// The evaluator failed; carries its message verbatim.
    EvalError(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownIndex => f.write_str("UnknownIndex"),
            SkipReason::MissingBand(roles) => {
                write!(f, "MissingBand:{}", roles.iter().map(|r| r.token()).join(","))
            }
            SkipReason::EvalError(msg) => write!(f, "EvalError: {msg}"),
        }
    }
}

impl From<EvalError> for SkipReason {
    fn from(e: EvalError) -> Self {
        SkipReason::EvalError(e.to_string())
    }
}
