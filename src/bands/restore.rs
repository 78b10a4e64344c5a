// src/bands/restore.rs
use crate::utils::band_data::BandData;

use super::BandRole;

/// Naming policy for retained (pass-through) bands.
///
/// Consumers downstream disagree on which name a mapped band should come
/// back out under, so the request picks: `Original` keeps the exact names
/// the input image had, `Canonical` relabels bands that served as role
/// bindings to the role's descriptive name (`nir`, `red`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetainedNaming {
    #[default]
    Original,
    Canonical,
}

/// Apply the naming policy to the retained bands.
///
/// `bindings` is the union of role→band mappings the evaluation actually
/// used. Only retained bands are relabeled; computed index bands never
/// pass through here. Under `Canonical`, a relabeling that would collide
/// with a different band's existing name is skipped and the original
/// name kept.
pub fn restore_names(
    bands: &[(String, BandData)],
    bindings: &[(BandRole, String)],
    naming: RetainedNaming,
) -> Vec<(String, BandData)> {
    match naming {
        RetainedNaming::Original => bands.to_vec(),
        RetainedNaming::Canonical => bands
            .iter()
            .map(|(name, data)| {
                let role = bindings
                    .iter()
                    .find(|(_, band)| band == name)
                    .map(|(role, _)| *role);
                let label = match role {
                    Some(role) if !taken_by_other(bands, role.name(), name) => {
                        role.name().to_string()
                    }
                    _ => name.clone(),
                };
                (label, data.clone())
            })
            .collect(),
    }
}

fn taken_by_other(bands: &[(String, BandData)], label: &str, this: &str) -> bool {
    bands.iter().any(|(name, _)| name == label && name != this)
}
