// src/processing/engine.rs
use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, warn};

use crate::bands::{resolve_roles, restore_names, BandMap, BandRole, RetainedNaming};
use crate::error::SkipReason;
use crate::expr;
use crate::registry::IndexRegistry;
use crate::utils::band_data::BandData;

/// One compute invocation: an in-memory image (ordered named bands), the
/// indices to compute, and how to treat the original bands afterwards.
#[derive(Debug, Clone)]
pub struct ComputeRequest {
    /// Band name -> pixel data, in image band order.
    pub bands: Vec<(String, BandData)>,
    /// Index names to compute; duplicates are ignored, order preserved.
    pub indices: Vec<String>,
    /// Explicit role mapping. Absent entries fall back to alias
    /// auto-detection.
    pub band_map: Option<BandMap>,
    /// Parameter overrides applied to every index that declares the
    /// parameter.
    pub parameters: HashMap<String, f32>,
    /// When false, the input bands are carried into the result next to
    /// the computed indices.
    pub drop_original_bands: bool,
    /// Naming policy for retained bands.
    pub retained_naming: RetainedNaming,
}

impl ComputeRequest {
    pub fn new(bands: Vec<(String, BandData)>, indices: Vec<String>) -> Self {
        Self {
            bands,
            indices,
            band_map: None,
            parameters: HashMap::new(),
            drop_original_bands: false,
            retained_naming: RetainedNaming::default(),
        }
    }
}

/// A per-index failure. The index it names was skipped; the rest of the
/// request was still processed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedIndex {
    pub index: String,
    pub reason: SkipReason,
}

/// Best-effort result of a compute request.
#[derive(Debug, Clone, Default)]
pub struct ComputeResult {
    /// Computed index bands, in request order.
    pub computed: Vec<(String, BandData)>,
    /// Original bands (empty when the request dropped them), named per
    /// the request's retained-naming policy.
    pub retained: Vec<(String, BandData)>,
    /// Skipped indices with structured reasons, in encounter order.
    pub skipped: Vec<SkippedIndex>,
}

impl ComputeResult {
    pub fn computed_band(&self, name: &str) -> Option<&BandData> {
        self.computed
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, data)| data)
    }

    pub fn retained_band(&self, name: &str) -> Option<&BandData> {
        self.retained
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data)
    }
}

/// The batch orchestrator: looks up, resolves, and evaluates each
/// requested index, collecting failures per index instead of aborting.
///
/// Holds only the immutable registry; `run` is stateless across calls —
/// no caching, no carryover.
pub struct IndexEngine {
    registry: IndexRegistry,
}

impl IndexEngine {
    pub fn new(registry: IndexRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    pub fn run(&self, request: &ComputeRequest) -> ComputeResult {
        let available: Vec<String> = request.bands.iter().map(|(name, _)| name.clone()).collect();

        let mut computed = Vec::new();
        let mut skipped = Vec::new();
        // Union of role bindings actually used, for the reverse mapper.
        let mut used_bindings: Vec<(BandRole, String)> = Vec::new();

        // De-dup is case-insensitive, matching registry lookup.
        for name in request.indices.iter().unique_by(|n| n.to_ascii_uppercase()) {
            let def = match self.registry.lookup(name) {
                Some(def) => def,
                None => {
                    warn!("skipping '{name}': not in registry");
                    skipped.push(SkippedIndex {
                        index: name.clone(),
                        reason: SkipReason::UnknownIndex,
                    });
                    continue;
                }
            };

            let bindings = match resolve_roles(
                def.required_roles(),
                request.band_map.as_ref(),
                &available,
            ) {
                Ok(bindings) => bindings,
                Err(missing) => {
                    warn!(
                        "skipping '{}': unresolved roles {}",
                        def.name(),
                        missing.iter().join(",")
                    );
                    skipped.push(SkippedIndex {
                        index: name.clone(),
                        reason: SkipReason::MissingBand(missing),
                    });
                    continue;
                }
            };

            let roles: HashMap<BandRole, BandData> = bindings
                .iter()
                .map(|(role, band)| {
                    let data = request
                        .bands
                        .iter()
                        .find(|(n, _)| n == band)
                        .map(|(_, d)| d.clone())
                        .expect("resolver only binds bands present on the image");
                    (*role, data)
                })
                .collect();
            let params = def.resolve_params(&request.parameters);

            match expr::evaluate(def.expr(), &roles, &params) {
                Ok(data) => {
                    debug!("computed {} over {} px", def.name(), data.len());
                    computed.push((def.name().to_string(), data));
                    for binding in bindings {
                        if !used_bindings.contains(&binding) {
                            used_bindings.push(binding);
                        }
                    }
                }
                Err(e) => {
                    warn!("skipping '{}': evaluation failed: {e}", def.name());
                    skipped.push(SkippedIndex {
                        index: name.clone(),
                        reason: e.into(),
                    });
                }
            }
        }

        let retained = if request.drop_original_bands {
            Vec::new()
        } else {
            restore_names(&request.bands, &used_bindings, request.retained_naming)
        };

        ComputeResult {
            computed,
            retained,
            skipped,
        }
    }
}
