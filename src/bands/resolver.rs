// src/bands/resolver.rs
use log::debug;

use super::alias::aliases;
use super::BandRole;
use crate::error::CalcError;

/// Caller-supplied mapping from canonical roles to the band names
/// actually present on the image. Insertion order is preserved so that
/// diagnostics and canonical renaming behave deterministically.
#[derive(Debug, Clone, Default)]
pub struct BandMap {
    entries: Vec<(BandRole, String)>,
}

impl BandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the mapping for a role.
    pub fn insert(&mut self, role: BandRole, band: impl Into<String>) {
        let band = band.into();
        if let Some(entry) = self.entries.iter_mut().find(|(r, _)| *r == role) {
            entry.1 = band;
        } else {
            self.entries.push((role, band));
        }
    }

    pub fn get(&self, role: BandRole) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, b)| b.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BandRole, &str)> {
        self.entries.iter().map(|(r, b)| (*r, b.as_str()))
    }

    /// Build from `role=BAND` pairs as they arrive from the CLI or a
    /// batch config. Unknown role keys are reported back to the caller.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, CalcError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = BandMap::new();
        for (key, band) in pairs {
            let role =
                BandRole::parse(key).ok_or_else(|| CalcError::UnknownRole(key.to_string()))?;
            map.insert(role, band);
        }
        Ok(map)
    }
}

/// Resolve each required role to a band name present on the image.
///
/// Explicit band-map entries are authoritative and used verbatim; roles
/// without an explicit entry fall back to a case-insensitive scan of the
/// available band names against the role's alias list (alias order wins
/// ties). Returns the full binding list, or the roles that resolved by
/// neither path.
pub fn resolve_roles(
    required: &[BandRole],
    band_map: Option<&BandMap>,
    available: &[String],
) -> Result<Vec<(BandRole, String)>, Vec<BandRole>> {
    let mut bindings = Vec::with_capacity(required.len());
    let mut missing = Vec::new();

    for &role in required {
        match resolve_one(role, band_map, available) {
            Some(band) => bindings.push((role, band)),
            None => missing.push(role),
        }
    }

    if missing.is_empty() {
        Ok(bindings)
    } else {
        Err(missing)
    }
}

fn resolve_one(role: BandRole, band_map: Option<&BandMap>, available: &[String]) -> Option<String> {
    if let Some(mapped) = band_map.and_then(|m| m.get(role)) {
        // The caller is authoritative, even when the name matches no
        // alias. It still has to exist on the image to be usable.
        return if available.iter().any(|b| b == mapped) {
            Some(mapped.to_string())
        } else {
            debug!("band map points {role} at '{mapped}', not present on image");
            None
        };
    }

    for alias in aliases(role) {
        if let Some(band) = available.iter().find(|b| b.eq_ignore_ascii_case(alias)) {
            debug!("auto-detected {role} -> '{band}' (alias '{alias}')");
            return Some(band.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn auto_detect_case_insensitive() {
        let available = names(&["NIR", "Red"]);
        let resolved =
            resolve_roles(&[BandRole::Nir, BandRole::Red], None, &available).unwrap();
        assert_eq!(resolved[0], (BandRole::Nir, "NIR".to_string()));
        assert_eq!(resolved[1], (BandRole::Red, "Red".to_string()));
    }

    #[test]
    fn auto_detect_sentinel_numbers() {
        let available = names(&["B04", "B08"]);
        let resolved =
            resolve_roles(&[BandRole::Nir, BandRole::Red], None, &available).unwrap();
        assert_eq!(resolved[0].1, "B08");
        assert_eq!(resolved[1].1, "B04");
    }

    #[test]
    fn explicit_map_beats_alias() {
        // Image carries a band literally named "nir", but the caller maps
        // the role elsewhere. The caller wins.
        let available = names(&["nir", "B8"]);
        let mut map = BandMap::new();
        map.insert(BandRole::Nir, "B8");
        let resolved = resolve_roles(&[BandRole::Nir], Some(&map), &available).unwrap();
        assert_eq!(resolved[0].1, "B8");
    }

    #[test]
    fn alias_order_decides_ties() {
        // "nir" precedes "B08" in the alias list, so it wins regardless
        // of the order bands appear on the image.
        let available = names(&["B08", "nir"]);
        let resolved = resolve_roles(&[BandRole::Nir], None, &available).unwrap();
        assert_eq!(resolved[0].1, "nir");
    }

    #[test]
    fn missing_roles_are_collected() {
        let available = names(&["B04", "B08"]);
        let err = resolve_roles(
            &[BandRole::Nir, BandRole::Swir1, BandRole::Swir2],
            None,
            &available,
        )
        .unwrap_err();
        assert_eq!(err, vec![BandRole::Swir1, BandRole::Swir2]);
    }

    #[test]
    fn mapped_band_must_exist() {
        let available = names(&["B04"]);
        let mut map = BandMap::new();
        map.insert(BandRole::Nir, "B08");
        let err = resolve_roles(&[BandRole::Nir], Some(&map), &available).unwrap_err();
        assert_eq!(err, vec![BandRole::Nir]);
    }

    #[test]
    fn from_pairs_rejects_unknown_role() {
        let err = BandMap::from_pairs(vec![("chartreuse", "B9")]).unwrap_err();
        assert!(matches!(err, CalcError::UnknownRole(role) if role == "chartreuse"));
    }
}
