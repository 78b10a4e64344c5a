// src/bands/mod.rs
pub mod alias;
pub mod resolver;
pub mod restore;

pub use resolver::{resolve_roles, BandMap};
pub use restore::{restore_names, RetainedNaming};

use std::fmt;

/// Canonical band roles: abstract band identities independent of any
/// sensor's naming convention. The formula grammar refers to bands only
/// through these tokens; actual band names enter the picture at the
/// resolver boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandRole {
    /// Coastal aerosol
    Aerosol,
    Blue,
    Green,
    Red,
    RedEdge1,
    RedEdge2,
    RedEdge3,
    Nir,
    /// Narrow NIR (Sentinel-2 B8A)
    Nir2,
    Swir1,
    Swir2,
    Thermal1,
}

impl BandRole {
    pub const ALL: [BandRole; 12] = [
        BandRole::Aerosol,
        BandRole::Blue,
        BandRole::Green,
        BandRole::Red,
        BandRole::RedEdge1,
        BandRole::RedEdge2,
        BandRole::RedEdge3,
        BandRole::Nir,
        BandRole::Nir2,
        BandRole::Swir1,
        BandRole::Swir2,
        BandRole::Thermal1,
    ];

    /// Short token used in formula strings.
    pub fn token(self) -> &'static str {
        match self {
            BandRole::Aerosol => "A",
            BandRole::Blue => "B",
            BandRole::Green => "G",
            BandRole::Red => "R",
            BandRole::RedEdge1 => "RE1",
            BandRole::RedEdge2 => "RE2",
            BandRole::RedEdge3 => "RE3",
            BandRole::Nir => "N",
            BandRole::Nir2 => "N2",
            BandRole::Swir1 => "S1",
            BandRole::Swir2 => "S2",
            BandRole::Thermal1 => "T1",
        }
    }

    /// Descriptive name, also the label used by the canonical renaming
    /// policy for retained bands.
    pub fn name(self) -> &'static str {
        match self {
            BandRole::Aerosol => "aerosol",
            BandRole::Blue => "blue",
            BandRole::Green => "green",
            BandRole::Red => "red",
            BandRole::RedEdge1 => "rededge1",
            BandRole::RedEdge2 => "rededge2",
            BandRole::RedEdge3 => "rededge3",
            BandRole::Nir => "nir",
            BandRole::Nir2 => "nir2",
            BandRole::Swir1 => "swir1",
            BandRole::Swir2 => "swir2",
            BandRole::Thermal1 => "thermal1",
        }
    }

    /// Exact (case-sensitive) formula-token lookup.
    pub fn from_token(s: &str) -> Option<BandRole> {
        BandRole::ALL.iter().copied().find(|r| r.token() == s)
    }

    /// Lenient lookup for band-map keys and CLI arguments: accepts the
    /// formula token or the descriptive name plus a few common spellings,
    /// case-insensitively.
    pub fn parse(s: &str) -> Option<BandRole> {
        let key = s.to_ascii_lowercase();
        for role in BandRole::ALL {
            if key == role.token().to_ascii_lowercase() || key == role.name() {
                return Some(role);
            }
        }
        match key.as_str() {
            "coastal" | "coastal_aerosol" => Some(BandRole::Aerosol),
            "red_edge_1" | "red_edge1" | "rede1" | "rededge" => Some(BandRole::RedEdge1),
            "red_edge_2" | "red_edge2" | "rede2" => Some(BandRole::RedEdge2),
            "red_edge_3" | "red_edge3" | "rede3" => Some(BandRole::RedEdge3),
            "near_infrared" => Some(BandRole::Nir),
            "narrow_nir" | "nir08" => Some(BandRole::Nir2),
            "swir_1" => Some(BandRole::Swir1),
            "swir_2" => Some(BandRole::Swir2),
            "thermal" | "tir" | "lwir" => Some(BandRole::Thermal1),
            _ => None,
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
