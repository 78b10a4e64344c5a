// tests/engine_tests.rs
use std::collections::HashMap;

use spectral_calc::bands::{BandMap, BandRole, RetainedNaming};
use spectral_calc::error::SkipReason;
use spectral_calc::processing::{ComputeRequest, IndexEngine};
use spectral_calc::registry::IndexRegistry;
use spectral_calc::utils::band_data::BandData;

/// Helper to build a one-row band from a value list
fn band(values: &[f32]) -> BandData {
    BandData::new((values.len(), 1), values.to_vec())
}

/// Helper to build an in-memory image from named value lists
fn image(bands: &[(&str, &[f32])]) -> Vec<(String, BandData)> {
    bands
        .iter()
        .map(|(name, values)| (name.to_string(), band(values)))
        .collect()
}

fn engine() -> IndexEngine {
    IndexEngine::new(IndexRegistry::builtin().unwrap())
}

fn names(requested: &[&str]) -> Vec<String> {
    requested.iter().map(|s| s.to_string()).collect()
}

#[test]
fn ndvi_known_values() {
    // (NIR, RED, expected NDVI)
    let test_cases = [
        (5000.0, 2500.0, 0.33333),
        (3000.0, 3000.0, 0.0),
        (1000.0, 500.0, 0.33333),
    ];
    let nir: Vec<f32> = test_cases.iter().map(|(n, _, _)| *n).collect();
    let red: Vec<f32> = test_cases.iter().map(|(_, r, _)| *r).collect();

    let mut band_map = BandMap::new();
    band_map.insert(BandRole::Nir, "B8");
    band_map.insert(BandRole::Red, "B4");

    let mut request = ComputeRequest::new(
        image(&[("B8", &nir), ("B4", &red)]),
        names(&["NDVI"]),
    );
    request.band_map = Some(band_map);

    let result = engine().run(&request);
    assert!(result.skipped.is_empty());
    let ndvi = result.computed_band("NDVI").unwrap();
    for (i, (_, _, expected)) in test_cases.iter().enumerate() {
        assert!(
            (ndvi.data()[i] - expected).abs() < 0.001,
            "expected {expected}, got {} at index {i}",
            ndvi.data()[i]
        );
    }
}

#[test]
fn zero_denominator_propagates_as_nodata() {
    let request = ComputeRequest::new(
        image(&[("nir", &[0.0]), ("red", &[0.0])]),
        names(&["NDVI"]),
    );
    let result = engine().run(&request);
    // 0/0 is NaN; the index still computes, nothing is skipped.
    assert!(result.skipped.is_empty());
    assert!(result.computed_band("NDVI").unwrap().data()[0].is_nan());
}

#[test]
fn unknown_index_is_skipped_not_fatal() {
    let request = ComputeRequest::new(
        image(&[("nir", &[5000.0]), ("red", &[2500.0])]),
        names(&["NDVI", "BOGUS123"]),
    );
    let result = engine().run(&request);

    assert!(result.computed_band("NDVI").is_some());
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].index, "BOGUS123");
    assert_eq!(result.skipped[0].reason, SkipReason::UnknownIndex);
    assert_eq!(result.skipped[0].reason.to_string(), "UnknownIndex");
}

#[test]
fn missing_band_names_the_role() {
    // CRI700 needs both red-edge bands; the image has only the first.
    let request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2]), ("rededge1", &[0.3])]),
        names(&["CRI700"]),
    );
    let result = engine().run(&request);

    assert!(result.computed.is_empty());
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].index, "CRI700");
    assert_eq!(result.skipped[0].reason.to_string(), "MissingBand:RE2");
}

#[test]
fn batch_is_best_effort() {
    // Two resolvable indices, one with missing bands, one unknown: the
    // failures are reported and the rest still computes.
    let request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2]), ("green", &[0.4])]),
        names(&["NDVI", "CRI700", "BOGUS", "NDWI"]),
    );
    let result = engine().run(&request);

    let computed: Vec<&str> = result.computed.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(computed, vec!["NDVI", "NDWI"]);

    let skipped: Vec<(&str, String)> = result
        .skipped
        .iter()
        .map(|s| (s.index.as_str(), s.reason.to_string()))
        .collect();
    assert_eq!(
        skipped,
        vec![
            ("CRI700", "MissingBand:RE1,RE2".to_string()),
            ("BOGUS", "UnknownIndex".to_string()),
        ]
    );
}

#[test]
fn duplicate_requests_compute_once() {
    let request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2])]),
        names(&["NDVI", "ndvi", "NDVI"]),
    );
    let result = engine().run(&request);
    assert_eq!(result.computed.len(), 1);
    assert!(result.skipped.is_empty());
}

#[test]
fn explicit_band_map_overrides_autodetect() {
    // The image has a band literally named "nir", but the caller maps
    // the NIR role to B8. B8's values must be used.
    let mut band_map = BandMap::new();
    band_map.insert(BandRole::Nir, "B8");

    let mut request = ComputeRequest::new(
        image(&[("nir", &[0.9]), ("B8", &[0.8]), ("red", &[0.2])]),
        names(&["NDVI"]),
    );
    request.band_map = Some(band_map);

    let result = engine().run(&request);
    let ndvi = result.computed_band("NDVI").unwrap();
    // (0.8 - 0.2) / (0.8 + 0.2) = 0.6, not (0.9 - 0.2) / (0.9 + 0.2)
    assert!((ndvi.data()[0] - 0.6).abs() < 1e-5);
}

#[test]
fn identical_requests_yield_identical_results() {
    let request = ComputeRequest::new(
        image(&[("nir", &[0.8, 0.6]), ("red", &[0.2, 0.3])]),
        names(&["NDVI", "CRI700", "RVI"]),
    );
    let first = engine().run(&request);
    let second = engine().run(&request);

    let keys = |r: &spectral_calc::processing::ComputeResult| {
        r.computed.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>()
    };
    assert_eq!(keys(&first), keys(&second));
    assert_eq!(first.skipped, second.skipped);
    assert_eq!(
        first.computed_band("NDVI").unwrap().data(),
        second.computed_band("NDVI").unwrap().data()
    );
}

#[test]
fn retained_bands_keep_original_names_by_default() {
    let mut band_map = BandMap::new();
    band_map.insert(BandRole::Nir, "B8");
    band_map.insert(BandRole::Red, "B4");

    let mut request = ComputeRequest::new(
        image(&[("B8", &[0.8]), ("B4", &[0.2]), ("B02", &[0.1])]),
        names(&["NDVI"]),
    );
    request.band_map = Some(band_map);

    let result = engine().run(&request);
    let retained: Vec<&str> = result.retained.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(retained, vec!["B8", "B4", "B02"]);
    assert_eq!(result.retained_band("B8").unwrap().data(), &[0.8]);
}

#[test]
fn retained_bands_can_use_canonical_names() {
    let mut band_map = BandMap::new();
    band_map.insert(BandRole::Nir, "B8");
    band_map.insert(BandRole::Red, "B4");

    let mut request = ComputeRequest::new(
        image(&[("B8", &[0.8]), ("B4", &[0.2]), ("B02", &[0.1])]),
        names(&["NDVI"]),
    );
    request.band_map = Some(band_map);
    request.retained_naming = RetainedNaming::Canonical;

    let result = engine().run(&request);
    let retained: Vec<&str> = result.retained.iter().map(|(n, _)| n.as_str()).collect();
    // Bands used as role bindings are relabeled; B02 was not used by
    // NDVI and keeps its name.
    assert_eq!(retained, vec!["nir", "red", "B02"]);
    assert_eq!(result.retained_band("nir").unwrap().data(), &[0.8]);
}

#[test]
fn canonical_naming_never_shadows_existing_band() {
    let mut band_map = BandMap::new();
    band_map.insert(BandRole::Nir, "B8");

    let mut request = ComputeRequest::new(
        image(&[("nir", &[0.9]), ("B8", &[0.8]), ("red", &[0.2])]),
        names(&["NDVI"]),
    );
    request.band_map = Some(band_map);
    request.retained_naming = RetainedNaming::Canonical;

    let result = engine().run(&request);
    let retained: Vec<&str> = result.retained.iter().map(|(n, _)| n.as_str()).collect();
    // "B8" served as the NIR binding but cannot take the label "nir":
    // a different band already owns it.
    assert_eq!(retained, vec!["nir", "B8", "red"]);
}

#[test]
fn computed_bands_are_never_renamed() {
    let mut request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2])]),
        names(&["NDVI"]),
    );
    request.retained_naming = RetainedNaming::Canonical;

    let result = engine().run(&request);
    assert_eq!(result.computed[0].0, "NDVI");
}

#[test]
fn drop_original_bands_leaves_retained_empty() {
    let mut request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2])]),
        names(&["NDVI"]),
    );
    request.drop_original_bands = true;

    let result = engine().run(&request);
    assert!(!result.computed.is_empty());
    assert!(result.retained.is_empty());
}

#[test]
fn parameter_overrides_change_the_result() {
    let bands = image(&[("nir", &[0.5]), ("red", &[0.1])]);

    // Default SAVI (L = 0.5): 1.5 * 0.4 / 1.1
    let request = ComputeRequest::new(bands.clone(), names(&["SAVI"]));
    let result = engine().run(&request);
    let savi = result.computed_band("SAVI").unwrap().data()[0];
    assert!((savi - 1.5 * 0.4 / 1.1).abs() < 1e-5);

    // With L = 0, SAVI reduces to NDVI.
    let mut request = ComputeRequest::new(bands, names(&["SAVI", "NDVI"]));
    request.parameters = HashMap::from([("L".to_string(), 0.0f32)]);
    let result = engine().run(&request);
    let savi = result.computed_band("SAVI").unwrap().data()[0];
    let ndvi = result.computed_band("NDVI").unwrap().data()[0];
    assert!((savi - ndvi).abs() < 1e-6);
}

#[test]
fn evi_uses_default_coefficients() {
    let request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2]), ("blue", &[0.1])]),
        names(&["EVI"]),
    );
    let result = engine().run(&request);
    let evi = result.computed_band("EVI").unwrap().data()[0];
    // 2.5 * (0.8 - 0.2) / (0.8 + 6*0.2 - 7.5*0.1 + 1)
    let expected = 2.5 * 0.6 / (0.8 + 1.2 - 0.75 + 1.0);
    assert!((evi - expected).abs() < 1e-5, "expected {expected}, got {evi}");
}

#[test]
fn shape_mismatch_skips_only_that_index() {
    // The NIR band disagrees with the others about the raster size, so
    // every index touching it fails; NGRDI (green/red only) survives.
    let bands = vec![
        ("nir".to_string(), BandData::filled((2, 2), 0.8)),
        ("red".to_string(), BandData::filled((3, 3), 0.2)),
        ("green".to_string(), BandData::filled((3, 3), 0.4)),
    ];
    let request = ComputeRequest::new(bands, names(&["NDVI", "NGRDI"]));
    let result = engine().run(&request);

    assert!(result.computed_band("NGRDI").is_some());
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].index, "NDVI");
    assert!(matches!(
        result.skipped[0].reason,
        SkipReason::EvalError(_)
    ));
    assert!(result.skipped[0]
        .reason
        .to_string()
        .starts_with("EvalError: "));
}

#[test]
fn computed_order_follows_request_order() {
    let request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2]), ("green", &[0.4])]),
        names(&["NDWI", "GNDVI", "NDVI"]),
    );
    let result = engine().run(&request);
    let computed: Vec<&str> = result.computed.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(computed, vec!["NDWI", "GNDVI", "NDVI"]);
}

#[test]
fn lowercase_request_resolves_to_catalog_name() {
    let request = ComputeRequest::new(
        image(&[("nir", &[0.8]), ("red", &[0.2])]),
        names(&["ndvi"]),
    );
    let result = engine().run(&request);
    assert_eq!(result.computed[0].0, "NDVI");
    assert!(result.computed_band("ndvi").is_some());
}

#[test]
fn fifty_indices_with_a_few_failures_still_deliver_the_rest() {
    // Vegetation-heavy image: visible + NIR + red edge, no SWIR, so
    // SWIR-based indices fail while everything else computes.
    let bands = image(&[
        ("aerosol", &[0.05]),
        ("blue", &[0.1]),
        ("green", &[0.4]),
        ("red", &[0.2]),
        ("rededge1", &[0.3]),
        ("rededge2", &[0.5]),
        ("rededge3", &[0.6]),
        ("nir", &[0.8]),
    ]);
    let requested = [
        "NDVI", "GNDVI", "EVI", "SAVI", "OSAVI", "MSAVI", "ARVI", "GEMI", "GLI", "MSR",
        "NGRDI", "NLI", "RDVI", "RVI", "TVI", "VIG", "WDRVI", "NDREI", "CRI700", "PSRI",
        "NDSI", "NBR", "MNDWI", "BAI", "ExG", "ExGR", "SIPI", "MTCI", "NDWI", "VARI",
    ];
    let request = ComputeRequest::new(bands, names(&requested));
    let result = engine().run(&request);

    let skipped: Vec<&str> = result.skipped.iter().map(|s| s.index.as_str()).collect();
    assert_eq!(skipped, vec!["NDSI", "NBR", "MNDWI"]);
    for skip in &result.skipped {
        assert!(matches!(skip.reason, SkipReason::MissingBand(_)));
    }
    assert_eq!(result.computed.len(), requested.len() - skipped.len());
}
