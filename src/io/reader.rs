// src/io/reader.rs
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{anyhow, Context, Result};
use gdal::Dataset;
use gdal::Metadata;
use log::debug;

use crate::utils::band_data::BandData;

/// Geospatial metadata carried from input to output.
pub struct GeoInfo {
    pub projection: String,
    pub geo_transform: [f64; 6],
    pub width: usize,
    pub height: usize,
}

/// A fully loaded multiband image: named bands in dataset order plus the
/// georeferencing needed to write results back out.
pub struct ImageBands {
    pub bands: Vec<(String, BandData)>,
    pub geo: GeoInfo,
}

impl ImageBands {
    pub fn band_names(&self) -> Vec<String> {
        self.bands.iter().map(|(name, _)| name.clone()).collect()
    }
}

/// Read every band of a raster into memory, whole-band, using a small
/// worker pool. Each worker opens its own dataset handle; GDAL datasets
/// are not shareable across threads without locking.
///
/// Band names come from the band description metadata; bands without a
/// description fall back to `B<n>` by position. Nodata values are
/// rewritten to NaN so the evaluator's float semantics apply uniformly.
pub fn read_image(path: &Path) -> Result<ImageBands> {
    let dataset =
        Dataset::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let (width, height) = dataset.raster_size();
    let count = dataset.raster_count();
    if count == 0 {
        return Err(anyhow!("{} has no raster bands", path.display()));
    }

    let geo = GeoInfo {
        projection: dataset.projection(),
        geo_transform: dataset.geo_transform()?.try_into().unwrap(),
        width,
        height,
    };

    let mut names = Vec::with_capacity(count);
    for i in 1..=count {
        let band = dataset.rasterband(i)?;
        let description = band.description().unwrap_or_default();
        names.push(if description.is_empty() {
            format!("B{i}")
        } else {
            description
        });
    }
    drop(dataset);

    let threads = num_cpus::get().min(count).max(1);
    debug!(
        "reading {} bands of {} with {threads} reader threads",
        count,
        path.display()
    );

    let (task_tx, task_rx) = flume::unbounded::<usize>();
    let (result_tx, result_rx) = flume::unbounded::<Result<(usize, BandData), String>>();

    let mut workers = Vec::with_capacity(threads);
    for _ in 0..threads {
        let task_rx = task_rx.clone();
        let result_tx = result_tx.clone();
        let path: PathBuf = path.to_path_buf();

        workers.push(thread::spawn(move || {
            let dataset = match Dataset::open(&path) {
                Ok(ds) => ds,
                Err(e) => {
                    let _ = result_tx.send(Err(e.to_string()));
                    return;
                }
            };
            for band_idx in task_rx {
                let result = read_band(&dataset, band_idx, (width, height));
                let _ = result_tx.send(result.map(|data| (band_idx, data)));
            }
        }));
    }

    for i in 1..=count {
        task_tx.send(i).expect("reader task channel closed early");
    }
    drop(task_tx);
    drop(result_tx);

    let mut slots: Vec<Option<BandData>> = vec![None; count];
    let mut first_error = None;
    for message in result_rx {
        match message {
            Ok((idx, data)) => slots[idx - 1] = Some(data),
            Err(e) if first_error.is_none() => first_error = Some(e),
            Err(_) => {}
        }
    }
    for worker in workers {
        let _ = worker.join();
    }
    if let Some(e) = first_error {
        return Err(anyhow!("reading {} failed: {e}", path.display()));
    }

    let bands = names
        .into_iter()
        .zip(slots)
        .map(|(name, slot)| {
            let data = slot.ok_or_else(|| anyhow!("band '{name}' was never read"))?;
            Ok((name, data))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ImageBands { bands, geo })
}

fn read_band(
    dataset: &Dataset,
    band_idx: usize,
    size: (usize, usize),
) -> Result<BandData, String> {
    let band = dataset.rasterband(band_idx).map_err(|e| e.to_string())?;
    let buffer = band
        .read_as::<f32>((0, 0), size, size, None)
        .map_err(|e| e.to_string())?;
    let mut values = buffer.data().to_vec();

    if let Some(nodata) = band.no_data_value() {
        let nodata = nodata as f32;
        for value in &mut values {
            if *value == nodata {
                *value = f32::NAN;
            }
        }
    }

    Ok(BandData::new(size, values))
}
