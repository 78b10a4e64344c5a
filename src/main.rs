// src/main.rs
use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, warn};

use spectral_calc::bands::{BandMap, RetainedNaming};
use spectral_calc::batch::process_batch;
use spectral_calc::cli::{Cli, Commands};
use spectral_calc::io::reader::read_image;
use spectral_calc::io::writer::{write_image, WriteOptions};
use spectral_calc::processing::{ComputeRequest, IndexEngine};
use spectral_calc::registry::{IndexKind, IndexRegistry};

fn main() -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_secs();
    builder.init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            input,
            output,
            indices,
            band_map,
            params,
            drop_bands,
            canonical_names,
            float,
            scale_factor,
            compress,
            compress_level,
            tiled,
        } => run_compute(ComputeArgs {
            input,
            output,
            indices,
            band_map,
            params,
            drop_bands,
            canonical_names,
            float,
            scale_factor,
            compress,
            compress_level,
            tiled,
        }),
        Commands::List { kind } => run_list(kind.as_deref()),
        Commands::Describe { name } => run_describe(&name),
        Commands::Batch { config } => process_batch(&config),
    }
}

struct ComputeArgs {
    input: PathBuf,
    output: PathBuf,
    indices: Vec<String>,
    band_map: Vec<(String, String)>,
    params: Vec<(String, f32)>,
    drop_bands: bool,
    canonical_names: bool,
    float: bool,
    scale_factor: i32,
    compress: String,
    compress_level: u8,
    tiled: bool,
}

fn run_compute(args: ComputeArgs) -> Result<()> {
    let engine = IndexEngine::new(IndexRegistry::builtin()?);

    let image = read_image(&args.input)?;
    info!(
        "{}: {}x{}, bands [{}]",
        args.input.display(),
        image.geo.width,
        image.geo.height,
        image.band_names().join(", ")
    );

    let band_map = if args.band_map.is_empty() {
        None
    } else {
        let pairs = args
            .band_map
            .iter()
            .map(|(role, band)| (role.as_str(), band.as_str()));
        Some(BandMap::from_pairs(pairs)?)
    };

    let request = ComputeRequest {
        bands: image.bands.clone(),
        indices: args.indices,
        band_map,
        parameters: args.params.into_iter().collect::<HashMap<_, _>>(),
        drop_original_bands: args.drop_bands,
        retained_naming: if args.canonical_names {
            RetainedNaming::Canonical
        } else {
            RetainedNaming::Original
        },
    };

    let result = engine.run(&request);
    for skip in &result.skipped {
        warn!("skipped {}: {}", skip.index, skip.reason);
    }
    if result.computed.is_empty() {
        return Err(anyhow!("none of the requested indices could be computed"));
    }

    let options = WriteOptions {
        fixed_point: !args.float,
        scale_factor: args.scale_factor,
        compress: args.compress,
        compress_level: args.compress_level,
        tiled: args.tiled,
    };
    write_image(
        &args.output,
        &result.computed,
        &result.retained,
        &image.geo,
        &options,
    )?;

    info!(
        "processing complete: {} ({}/{} indices)",
        args.output.display(),
        result.computed.len(),
        result.computed.len() + result.skipped.len()
    );
    Ok(())
}

fn run_list(kind: Option<&str>) -> Result<()> {
    let registry = IndexRegistry::builtin()?;
    let kind = match kind {
        Some(s) => Some(IndexKind::parse(s).ok_or_else(|| anyhow!("unknown kind '{s}'"))?),
        None => None,
    };

    for def in registry.list() {
        if kind.is_some_and(|k| k != def.kind()) {
            continue;
        }
        println!(
            "{:<10} {:<10} {}",
            def.name(),
            def.kind().to_string(),
            def.long_name()
        );
    }
    Ok(())
}

fn run_describe(name: &str) -> Result<()> {
    let registry = IndexRegistry::builtin()?;
    let def = registry
        .lookup(name)
        .ok_or_else(|| anyhow!("'{name}' is not in the catalog"))?;

    println!("{} - {}", def.name(), def.long_name());
    println!("kind:    {}", def.kind());
    println!("formula: {}", def.formula());
    println!(
        "bands:   {}",
        def.required_roles()
            .iter()
            .map(|r| format!("{} ({})", r.token(), r.name()))
            .collect::<Vec<_>>()
            .join(", ")
    );
    if !def.params().is_empty() {
        println!(
            "params:  {}",
            def.params()
                .iter()
                .map(|(name, default)| format!("{name}={default}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    let (lo, hi) = def.domain();
    println!("domain:  [{lo}, {hi}]");
    Ok(())
}
