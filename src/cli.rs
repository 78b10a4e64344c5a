// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spectral-calc")]
#[command(about = "Spectral index calculator with band-name resolution")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute named indices from a multiband raster
    Compute {
        /// Input raster; band names come from band descriptions
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "output.tif")]
        output: PathBuf,

        /// Index to compute, repeatable (e.g. --index NDVI --index EVI)
        #[arg(short = 'x', long = "index", required = true)]
        indices: Vec<String>,

        /// Explicit role mapping, role=BAND, repeatable
        /// (e.g. --band-map nir=B8 --band-map red=B4)
        #[arg(short = 'm', long = "band-map", value_parser = parse_band_map)]
        band_map: Vec<(String, String)>,

        /// Parameter override, NAME=VALUE, repeatable (e.g. --param L=0.25)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, f32)>,

        /// Drop the original bands from the output
        #[arg(long)]
        drop_bands: bool,

        /// Label retained bands with canonical role names instead of
        /// their original names
        #[arg(long)]
        canonical_names: bool,

        /// Use float32 output instead of scaled int16
        #[arg(long)]
        float: bool,

        /// Scaling factor for fixed-point output
        #[arg(long, default_value = "10000")]
        scale_factor: i32,

        /// Compression algorithm (NONE, DEFLATE, ZSTD, LZW)
        #[arg(long, default_value = "DEFLATE")]
        compress: String,

        /// Compression level
        #[arg(long, default_value = "6")]
        compress_level: u8,

        /// Write tiled output
        #[arg(long)]
        tiled: bool,
    },

    /// List the indices in the catalog
    List {
        /// Restrict to one application domain
        /// (vegetation, water, snow, burn, soil, urban)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Show one index definition in full
    Describe {
        /// Index name, case-insensitive
        name: String,
    },

    /// Run multiple compute jobs from a JSON configuration file
    Batch {
        /// Configuration file path
        config: PathBuf,
    },
}

fn parse_band_map(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((role, band)) if !role.is_empty() && !band.is_empty() => {
            Ok((role.to_string(), band.to_string()))
        }
        _ => Err(format!("expected role=BAND, got '{s}'")),
    }
}

fn parse_param(s: &str) -> Result<(String, f32), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let value: f32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_map_arg_parses() {
        assert_eq!(
            parse_band_map("nir=B8").unwrap(),
            ("nir".to_string(), "B8".to_string())
        );
        assert!(parse_band_map("nir").is_err());
        assert!(parse_band_map("=B8").is_err());
    }

    #[test]
    fn param_arg_parses() {
        assert_eq!(parse_param("L=0.25").unwrap(), ("L".to_string(), 0.25));
        assert!(parse_param("L=soil").is_err());
    }
}
