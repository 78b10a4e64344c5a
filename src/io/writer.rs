// src/io/writer.rs
use std::path::Path;

use anyhow::{anyhow, Result};
use gdal::raster::{Buffer, RasterCreationOptions};
use gdal::{DriverManager, DriverType, Metadata};
use log::{info, warn};

use crate::utils::band_data::BandData;
use crate::utils::fixed_point::to_fixed_point;

use super::reader::GeoInfo;

const NODATA_VALUE_INT: i16 = -10000;

#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write int16 with a scale factor instead of float32. Only sensible
    /// for indices bounded in [-1, 1].
    pub fixed_point: bool,
    pub scale_factor: i32,
    pub compress: String,
    pub compress_level: u8,
    pub tiled: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            fixed_point: true,
            scale_factor: 10_000,
            compress: "DEFLATE".to_string(),
            compress_level: 6,
            tiled: true,
        }
    }
}

/// Write computed index bands followed by retained original bands to a
/// single multiband raster. Band descriptions carry the output names.
pub fn write_image(
    output_path: &Path,
    computed: &[(String, BandData)],
    retained: &[(String, BandData)],
    geo: &GeoInfo,
    options: &WriteOptions,
) -> Result<()> {
    let bands: Vec<&(String, BandData)> = computed.iter().chain(retained.iter()).collect();
    if bands.is_empty() {
        return Err(anyhow!("no bands to write"));
    }
    for (name, data) in &bands {
        if data.shape() != (geo.width, geo.height) {
            return Err(anyhow!(
                "band '{}' shape {:?} does not match raster {}x{}",
                name,
                data.shape(),
                geo.width,
                geo.height
            ));
        }
    }

    // Fixed-point scaling applies to index values, not to retained
    // reflectance bands; mixed output falls back to float32.
    let fixed_point = if options.fixed_point && !retained.is_empty() {
        warn!("retained bands present, writing float32 instead of fixed-point");
        false
    } else {
        options.fixed_point
    };

    let driver = DriverManager::get_output_driver_for_dataset_name(output_path, DriverType::Raster)
        .ok_or_else(|| anyhow!("no raster driver for {}", output_path.display()))?;

    let mut creation = Vec::new();
    if options.compress.to_uppercase() != "NONE" {
        creation.push(format!("COMPRESS={}", options.compress.to_uppercase()));
        match options.compress.to_uppercase().as_str() {
            "DEFLATE" => creation.push(format!("ZLEVEL={}", options.compress_level.min(9))),
            "ZSTD" => creation.push(format!("ZSTD_LEVEL={}", options.compress_level.min(22))),
            _ => {}
        }
    }
    if options.tiled {
        creation.push("TILED=YES".to_string());
    }
    creation.push("NUM_THREADS=ALL_CPUS".to_string());
    let creation_options = RasterCreationOptions::from_iter(creation);

    let mut output = if fixed_point {
        driver.create_with_band_type_with_options::<i16, _>(
            output_path,
            geo.width,
            geo.height,
            bands.len(),
            &creation_options,
        )?
    } else {
        driver.create_with_band_type_with_options::<f32, _>(
            output_path,
            geo.width,
            geo.height,
            bands.len(),
            &creation_options,
        )?
    };

    output.set_projection(&geo.projection)?;
    output.set_geo_transform(&geo.geo_transform)?;

    for (i, (name, data)) in bands.iter().enumerate() {
        let mut band = output.rasterband(i + 1)?;
        band.set_description(name)?;

        if fixed_point {
            band.set_no_data_value(Some(NODATA_VALUE_INT as f64))?;
            band.set_metadata_item("SCALE", &format!("{}", 1.0 / options.scale_factor as f64), "")?;
            band.set_metadata_item("OFFSET", "0", "")?;

            let scaled = to_fixed_point(data.data(), options.scale_factor, NODATA_VALUE_INT);
            let mut buffer = Buffer::new(data.shape(), scaled);
            band.write((0, 0), data.shape(), &mut buffer)?;
        } else {
            band.set_no_data_value(Some(f64::NAN))?;

            let mut buffer = Buffer::new(data.shape(), data.data().to_vec());
            band.write((0, 0), data.shape(), &mut buffer)?;
        }
    }

    output.flush_cache()?;
    info!(
        "wrote {} ({} index bands, {} retained)",
        output_path.display(),
        computed.len(),
        retained.len()
    );
    Ok(())
}
