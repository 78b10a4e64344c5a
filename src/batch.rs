// src/batch.rs
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::bands::{BandMap, RetainedNaming};
use crate::io::writer::{write_image, WriteOptions};
use crate::processing::{ComputeRequest, IndexEngine};
use crate::registry::IndexRegistry;
use crate::utils::cache::ImageCache;

#[derive(Deserialize, Serialize, Debug)]
pub struct BatchConfig {
    #[serde(default)]
    pub global: GlobalParams,
    pub jobs: Vec<Job>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct GlobalParams {
    #[serde(default = "default_compress")]
    pub compress: String,
    #[serde(default = "default_compress_level")]
    pub compress_level: u8,
    #[serde(default)]
    pub float: bool,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: i32,
    #[serde(default = "default_true")]
    pub tiled: bool,
    #[serde(default)]
    pub drop_original_bands: bool,
    #[serde(default)]
    pub canonical_names: bool,
    #[serde(default)]
    pub parameters: HashMap<String, f32>,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            compress: default_compress(),
            compress_level: default_compress_level(),
            float: false,
            scale_factor: default_scale_factor(),
            tiled: default_true(),
            drop_original_bands: false,
            canonical_names: false,
            parameters: HashMap::new(),
        }
    }
}

fn default_compress() -> String {
    "DEFLATE".to_string()
}

fn default_compress_level() -> u8 {
    6
}

fn default_scale_factor() -> i32 {
    10000
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Job {
    pub input: String,
    pub output: String,
    pub indices: Vec<String>,
    #[serde(default)]
    pub band_map: Option<HashMap<String, String>>,
    #[serde(default)]
    pub parameters: HashMap<String, f32>,
    pub drop_original_bands: Option<bool>,
    pub canonical_names: Option<bool>,
    pub float: Option<bool>,
    pub scale_factor: Option<i32>,
    pub compress: Option<String>,
    pub compress_level: Option<u8>,
    pub tiled: Option<bool>,
}

pub fn process_batch(config_path: &PathBuf) -> Result<()> {
    let config_content = fs::read_to_string(config_path)?;
    let config: BatchConfig = serde_json::from_str(&config_content)?;

    let engine = IndexEngine::new(IndexRegistry::builtin()?);
    let cache = ImageCache::new();

    info!("starting batch processing with {} jobs", config.jobs.len());

    let mut total_computed = 0usize;
    let mut total_skipped = 0usize;

    for (i, job) in config.jobs.iter().enumerate() {
        info!(
            "[{}/{}] {} -> {}",
            i + 1,
            config.jobs.len(),
            job.input,
            job.output
        );

        let image = cache.get(Path::new(&job.input))?;

        let band_map = match &job.band_map {
            Some(map) => {
                let mut pairs: Vec<(&str, &str)> = map
                    .iter()
                    .map(|(role, band)| (role.as_str(), band.as_str()))
                    .collect();
                pairs.sort();
                Some(
                    BandMap::from_pairs(pairs)
                        .map_err(|e| anyhow!("job {}: {e}", i + 1))?,
                )
            }
            None => None,
        };

        // Job-level settings override the globals.
        let mut parameters = config.global.parameters.clone();
        parameters.extend(job.parameters.clone());
        let drop_original_bands = job
            .drop_original_bands
            .unwrap_or(config.global.drop_original_bands);
        let canonical_names = job.canonical_names.unwrap_or(config.global.canonical_names);

        let request = ComputeRequest {
            bands: image.bands.clone(),
            indices: job.indices.clone(),
            band_map,
            parameters,
            drop_original_bands,
            retained_naming: if canonical_names {
                RetainedNaming::Canonical
            } else {
                RetainedNaming::Original
            },
        };

        let result = engine.run(&request);
        for skip in &result.skipped {
            warn!("job {}: skipped {}: {}", i + 1, skip.index, skip.reason);
        }
        total_computed += result.computed.len();
        total_skipped += result.skipped.len();

        if result.computed.is_empty() {
            warn!("job {}: no index could be computed, no output written", i + 1);
            continue;
        }

        let options = WriteOptions {
            fixed_point: !job.float.unwrap_or(config.global.float),
            scale_factor: job.scale_factor.unwrap_or(config.global.scale_factor),
            compress: job
                .compress
                .clone()
                .unwrap_or_else(|| config.global.compress.clone()),
            compress_level: job.compress_level.unwrap_or(config.global.compress_level),
            tiled: job.tiled.unwrap_or(config.global.tiled),
        };
        write_image(
            Path::new(&job.output),
            &result.computed,
            &result.retained,
            &image.geo,
            &options,
        )?;
    }

    info!(
        "batch processing complete: {total_computed} bands computed, {total_skipped} indices skipped"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply() {
        let config: BatchConfig = serde_json::from_str(
            r#"{
                "jobs": [
                    {"input": "a.tif", "output": "out.tif", "indices": ["NDVI"]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.global.compress, "DEFLATE");
        assert_eq!(config.global.compress_level, 6);
        assert_eq!(config.global.scale_factor, 10000);
        assert!(config.global.tiled);
        assert!(!config.global.drop_original_bands);
        assert!(config.jobs[0].band_map.is_none());
        assert!(config.jobs[0].parameters.is_empty());
    }

    #[test]
    fn job_overrides_deserialize() {
        let config: BatchConfig = serde_json::from_str(
            r#"{
                "global": {"float": true, "drop_original_bands": true},
                "jobs": [
                    {
                        "input": "a.tif",
                        "output": "out.tif",
                        "indices": ["SAVI"],
                        "band_map": {"nir": "B8", "red": "B4"},
                        "parameters": {"L": 0.25},
                        "float": false,
                        "scale_factor": 1000
                    }
                ]
            }"#,
        )
        .unwrap();
        assert!(config.global.float);
        let job = &config.jobs[0];
        assert_eq!(job.float, Some(false));
        assert_eq!(job.scale_factor, Some(1000));
        assert_eq!(job.parameters.get("L"), Some(&0.25));
        assert_eq!(
            job.band_map.as_ref().unwrap().get("nir"),
            Some(&"B8".to_string())
        );
    }
}
