// src/bands/alias.rs
use super::BandRole;

/// Ordered alias lists used by auto-detection. Matching is
/// case-insensitive but otherwise exact, and list order decides ties:
/// the first alias that matches an available band wins.
///
/// Numeric names follow the Sentinel-2 convention (B04, B08, B8A, B11…),
/// which is what the descriptive names line up with here. Sensors whose
/// numbering diverges (Landsat thermal bands, PlanetScope B0..B7) need an
/// explicit band map instead.
pub fn aliases(role: BandRole) -> &'static [&'static str] {
    match role {
        BandRole::Aerosol => &["aerosol", "coastal", "coastal_aerosol", "A", "B01", "B1"],
        BandRole::Blue => &["blue", "B", "B02", "B2"],
        BandRole::Green => &["green", "G", "B03", "B3"],
        BandRole::Red => &["red", "R", "B04", "B4"],
        BandRole::RedEdge1 => &["rededge1", "red_edge_1", "rededge", "RE1", "B05", "B5"],
        BandRole::RedEdge2 => &["rededge2", "red_edge_2", "RE2", "B06", "B6"],
        BandRole::RedEdge3 => &["rededge3", "red_edge_3", "RE3", "B07", "B7"],
        BandRole::Nir => &["nir", "near_infrared", "N", "B08", "B8"],
        BandRole::Nir2 => &["nir08", "narrow_nir", "nir2", "N2", "B8A"],
        BandRole::Swir1 => &["swir1", "swir_1", "swir16", "S1", "B11"],
        BandRole::Swir2 => &["swir2", "swir_2", "swir22", "S2", "B12"],
        BandRole::Thermal1 => &["thermal", "thermal1", "tir", "lwir", "T1", "B10"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_aliases() {
        for role in BandRole::ALL {
            assert!(!aliases(role).is_empty(), "{role} has no aliases");
        }
    }

    #[test]
    fn descriptive_name_is_first() {
        // The human-readable name outranks sensor band numbers.
        assert_eq!(aliases(BandRole::Nir)[0], "nir");
        assert_eq!(aliases(BandRole::Red)[0], "red");
    }
}
