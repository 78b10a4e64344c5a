// src/registry/catalog.rs
//
// Builtin index catalog. Formulas are written against the canonical role
// tokens (A, B, G, R, RE1, RE2, RE3, N, N2, S1, S2, T1) plus each entry's
// declared parameter names; parameters shadow role tokens, so EVI's gain
// `G` is a parameter while GLI's `G` is the green band. The grammar has
// no power operator: squares are written as products.
//
// Numeric constants and default parameter values follow the standard
// remote-sensing literature forms. Domains are the typical output value
// range, recorded as data for downstream consumers (stretching, QA).

use super::CatalogEntry;
use super::IndexKind::{Burn, Snow, Soil, Urban, Vegetation, Water};

pub(super) const CATALOG: &[CatalogEntry] = &[
    // --- Vegetation: classic red/NIR family ---
    CatalogEntry {
        name: "NDVI",
        long_name: "Normalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(N - R)/(N + R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "GNDVI",
        long_name: "Green Normalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(N - G)/(N + G)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "BNDVI",
        long_name: "Blue Normalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(N - B)/(N + B)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "DVI",
        long_name: "Difference Vegetation Index",
        kind: Vegetation,
        formula: "N - R",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "RVI",
        long_name: "Ratio Vegetation Index",
        kind: Vegetation,
        formula: "N/R",
        params: &[],
        domain: (0.0, 35.0),
    },
    CatalogEntry {
        name: "IPVI",
        long_name: "Infrared Percentage Vegetation Index",
        kind: Vegetation,
        formula: "N/(N + R)",
        params: &[],
        domain: (0.0, 1.0),
    },
    CatalogEntry {
        name: "EVI",
        long_name: "Enhanced Vegetation Index",
        kind: Vegetation,
        formula: "G*(N - R)/(N + C1*R - C2*B + L)",
        params: &[("G", 2.5), ("C1", 6.0), ("C2", 7.5), ("L", 1.0)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "EVI2",
        long_name: "Two-Band Enhanced Vegetation Index",
        kind: Vegetation,
        formula: "G*(N - R)/(N + 2.4*R + L)",
        params: &[("G", 2.5), ("L", 1.0)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "SAVI",
        long_name: "Soil Adjusted Vegetation Index",
        kind: Vegetation,
        formula: "(1.0 + L)*(N - R)/(N + R + L)",
        params: &[("L", 0.5)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "OSAVI",
        long_name: "Optimized Soil Adjusted Vegetation Index",
        kind: Vegetation,
        formula: "(1.0 + 0.16)*(N - R)/(N + R + 0.16)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MSAVI",
        long_name: "Modified Soil Adjusted Vegetation Index",
        kind: Vegetation,
        formula: "0.5*(2.0*N + 1.0 - sqrt((2.0*N + 1.0)*(2.0*N + 1.0) - 8.0*(N - R)))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "ARVI",
        long_name: "Atmospherically Resistant Vegetation Index",
        kind: Vegetation,
        formula: "(N - (R - gamma*(B - R)))/(N + (R - gamma*(B - R)))",
        params: &[("gamma", 1.0)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "GEMI",
        long_name: "Global Environment Monitoring Index",
        kind: Vegetation,
        formula: "(2.0*(N*N - R*R) + 1.5*N + 0.5*R)/(N + R + 0.5)*(1.0 - 0.25*(2.0*(N*N - R*R) + 1.5*N + 0.5*R)/(N + R + 0.5)) - (R - 0.125)/(1.0 - R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "GLI",
        long_name: "Green Leaf Index",
        kind: Vegetation,
        formula: "(2.0*G - R - B)/(2.0*G + R + B)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MSR",
        long_name: "Modified Simple Ratio",
        kind: Vegetation,
        formula: "(N/R - 1.0)/sqrt(N/R + 1.0)",
        params: &[],
        domain: (-1.0, 30.0),
    },
    CatalogEntry {
        name: "NLI",
        long_name: "Non-Linear Vegetation Index",
        kind: Vegetation,
        formula: "(N*N - R)/(N*N + R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MNLI",
        long_name: "Modified Non-Linear Vegetation Index",
        kind: Vegetation,
        formula: "(1.0 + L)*(N*N - R)/(N*N + R + L)",
        params: &[("L", 0.5)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "RDVI",
        long_name: "Renormalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(N - R)/sqrt(N + R)",
        params: &[],
        domain: (0.0, 1.0),
    },
    CatalogEntry {
        name: "TVI",
        long_name: "Transformed Vegetation Index",
        kind: Vegetation,
        formula: "sqrt((N - R)/(N + R) + 0.5)",
        params: &[],
        domain: (0.0, 1.25),
    },
    CatalogEntry {
        name: "WDRVI",
        long_name: "Wide Dynamic Range Vegetation Index",
        kind: Vegetation,
        formula: "(alpha*N - R)/(alpha*N + R)",
        params: &[("alpha", 0.1)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NGRDI",
        long_name: "Normalized Green Red Difference Index",
        kind: Vegetation,
        formula: "(G - R)/(G + R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "VIG",
        long_name: "Vegetation Index Green",
        kind: Vegetation,
        formula: "(G - R)/(G + R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "TGI",
        long_name: "Triangular Greenness Index",
        kind: Vegetation,
        formula: "-0.5*(190.0*(R - G) - 120.0*(R - B))",
        params: &[],
        domain: (-100.0, 100.0),
    },
    CatalogEntry {
        name: "ExG",
        long_name: "Excess Green Index",
        kind: Vegetation,
        formula: "2.0*G - R - B",
        params: &[],
        domain: (-2.0, 2.0),
    },
    CatalogEntry {
        name: "ExR",
        long_name: "Excess Red Index",
        kind: Vegetation,
        formula: "1.3*R - G",
        params: &[],
        domain: (-1.0, 1.4),
    },
    CatalogEntry {
        name: "ExGR",
        long_name: "Excess Green minus Excess Red Index",
        kind: Vegetation,
        formula: "(2.0*G - R - B) - (1.3*R - G)",
        params: &[],
        domain: (-3.0, 3.0),
    },
    CatalogEntry {
        name: "VARI",
        long_name: "Visible Atmospherically Resistant Index",
        kind: Vegetation,
        formula: "(G - R)/(G + R - B)",
        params: &[],
        domain: (-10.0, 10.0),
    },
    CatalogEntry {
        name: "CIG",
        long_name: "Chlorophyll Index Green",
        kind: Vegetation,
        formula: "N/G - 1.0",
        params: &[],
        domain: (-1.0, 30.0),
    },
    CatalogEntry {
        name: "CVI",
        long_name: "Chlorophyll Vegetation Index",
        kind: Vegetation,
        formula: "(N*R)/(G*G)",
        params: &[],
        domain: (0.0, 30.0),
    },
    CatalogEntry {
        name: "GBNDVI",
        long_name: "Green-Blue Normalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(N - (G + B))/(N + (G + B))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "GRNDVI",
        long_name: "Green-Red Normalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(N - (G + R))/(N + (G + R))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "PNDVI",
        long_name: "Pan Normalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(N - (G + R + B))/(N + (G + R + B))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "RGBVI",
        long_name: "Red Green Blue Vegetation Index",
        kind: Vegetation,
        formula: "(G*G - B*R)/(G*G + B*R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MGRVI",
        long_name: "Modified Green Red Vegetation Index",
        kind: Vegetation,
        formula: "(G*G - R*R)/(G*G + R*R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "GCC",
        long_name: "Green Chromatic Coordinate",
        kind: Vegetation,
        formula: "G/(R + G + B)",
        params: &[],
        domain: (0.0, 1.0),
    },
    CatalogEntry {
        name: "RCC",
        long_name: "Red Chromatic Coordinate",
        kind: Vegetation,
        formula: "R/(R + G + B)",
        params: &[],
        domain: (0.0, 1.0),
    },
    CatalogEntry {
        name: "BCC",
        long_name: "Blue Chromatic Coordinate",
        kind: Vegetation,
        formula: "B/(R + G + B)",
        params: &[],
        domain: (0.0, 1.0),
    },
    CatalogEntry {
        name: "NIRv",
        long_name: "Near-Infrared Reflectance of Vegetation",
        kind: Vegetation,
        formula: "((N - R)/(N + R))*N",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "FCVI",
        long_name: "Fluorescence Correction Vegetation Index",
        kind: Vegetation,
        formula: "N - (R + G + B)/3.0",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "SIPI",
        long_name: "Structure Insensitive Pigment Index",
        kind: Vegetation,
        formula: "(N - A)/(N - R)",
        params: &[],
        domain: (0.0, 2.0),
    },
    CatalogEntry {
        name: "NDYI",
        long_name: "Normalized Difference Yellowness Index",
        kind: Vegetation,
        formula: "(G - B)/(G + B)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "AFRI1600",
        long_name: "Aerosol Free Vegetation Index 1600",
        kind: Vegetation,
        formula: "(N - 0.66*S1)/(N + 0.66*S1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "AFRI2100",
        long_name: "Aerosol Free Vegetation Index 2100",
        kind: Vegetation,
        formula: "(N - 0.5*S2)/(N + 0.5*S2)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    // --- Vegetation: red-edge family ---
    CatalogEntry {
        name: "NDREI",
        long_name: "Normalized Difference Red Edge Index",
        kind: Vegetation,
        formula: "(N - RE1)/(N + RE1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "CIRE",
        long_name: "Chlorophyll Index Red Edge",
        kind: Vegetation,
        formula: "N/RE1 - 1.0",
        params: &[],
        domain: (-1.0, 30.0),
    },
    CatalogEntry {
        name: "MTCI",
        long_name: "MERIS Terrestrial Chlorophyll Index",
        kind: Vegetation,
        formula: "(RE2 - RE1)/(RE1 - R)",
        params: &[],
        domain: (0.0, 15.0),
    },
    CatalogEntry {
        name: "IRECI",
        long_name: "Inverted Red Edge Chlorophyll Index",
        kind: Vegetation,
        formula: "(RE3 - R)/(RE1/RE2)",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "S2REP",
        long_name: "Sentinel-2 Red Edge Position",
        kind: Vegetation,
        formula: "705.0 + 35.0*(((RE3 + R)/2.0 - RE1)/(RE2 - RE1))",
        params: &[],
        domain: (690.0, 740.0),
    },
    CatalogEntry {
        name: "MCARI",
        long_name: "Modified Chlorophyll Absorption in Reflectance Index",
        kind: Vegetation,
        formula: "((RE1 - R) - 0.2*(RE1 - G))*(RE1/R)",
        params: &[],
        domain: (0.0, 15.0),
    },
    CatalogEntry {
        name: "TCARI",
        long_name: "Transformed Chlorophyll Absorption in Reflectance Index",
        kind: Vegetation,
        formula: "3.0*((RE1 - R) - 0.2*(RE1 - G)*(RE1/R))",
        params: &[],
        domain: (0.0, 15.0),
    },
    CatalogEntry {
        name: "TCI",
        long_name: "Triangular Chlorophyll Index",
        kind: Vegetation,
        formula: "1.2*(RE1 - G) - 1.5*(R - G)*sqrt(RE1/R)",
        params: &[],
        domain: (-1.0, 15.0),
    },
    CatalogEntry {
        name: "ARI",
        long_name: "Anthocyanin Reflectance Index",
        kind: Vegetation,
        formula: "1.0/G - 1.0/RE1",
        params: &[],
        domain: (-100.0, 100.0),
    },
    CatalogEntry {
        name: "ARI2",
        long_name: "Anthocyanin Reflectance Index 2",
        kind: Vegetation,
        formula: "N*(1.0/G - 1.0/RE1)",
        params: &[],
        domain: (-100.0, 100.0),
    },
    CatalogEntry {
        name: "CRI550",
        long_name: "Carotenoid Reflectance Index 550",
        kind: Vegetation,
        formula: "1.0/B - 1.0/G",
        params: &[],
        domain: (-100.0, 100.0),
    },
    CatalogEntry {
        name: "CRI700",
        long_name: "Carotenoid Reflectance Index 700",
        kind: Vegetation,
        formula: "1.0/RE1 - 1.0/RE2",
        params: &[],
        domain: (-100.0, 100.0),
    },
    CatalogEntry {
        name: "PSRI",
        long_name: "Plant Senescing Reflectance Index",
        kind: Vegetation,
        formula: "(R - G)/RE2",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NDVI705",
        long_name: "Red Edge Normalized Difference Vegetation Index",
        kind: Vegetation,
        formula: "(RE2 - RE1)/(RE2 + RE1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MSR705",
        long_name: "Modified Simple Ratio 705",
        kind: Vegetation,
        formula: "(RE2/RE1 - 1.0)/sqrt(RE2/RE1 + 1.0)",
        params: &[],
        domain: (-1.0, 30.0),
    },
    CatalogEntry {
        name: "SeLI",
        long_name: "Sentinel-2 LAI Green Index",
        kind: Vegetation,
        formula: "(N2 - RE1)/(N2 + RE1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "CCCI",
        long_name: "Canopy Chlorophyll Content Index",
        kind: Vegetation,
        formula: "((N - RE1)/(N + RE1))/((N - R)/(N + R))",
        params: &[],
        domain: (-3.0, 3.0),
    },
    CatalogEntry {
        name: "NDCI",
        long_name: "Normalized Difference Chlorophyll Index",
        kind: Vegetation,
        formula: "(RE1 - R)/(RE1 + R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NHFD",
        long_name: "Non-Homogeneous Feature Difference",
        kind: Urban,
        formula: "(RE1 - A)/(RE1 + A)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "DSWI1",
        long_name: "Disease Water Stress Index 1",
        kind: Vegetation,
        formula: "N/S1",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "DSWI2",
        long_name: "Disease Water Stress Index 2",
        kind: Vegetation,
        formula: "S1/G",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "DSWI3",
        long_name: "Disease Water Stress Index 3",
        kind: Vegetation,
        formula: "S1/R",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "DSWI4",
        long_name: "Disease Water Stress Index 4",
        kind: Vegetation,
        formula: "G/R",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "DSWI5",
        long_name: "Disease Water Stress Index 5",
        kind: Vegetation,
        formula: "(N + G)/(S1 + R)",
        params: &[],
        domain: (0.0, 10.0),
    },
    // --- Water & moisture ---
    CatalogEntry {
        name: "NDWI",
        long_name: "Normalized Difference Water Index",
        kind: Water,
        formula: "(G - N)/(G + N)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MNDWI",
        long_name: "Modified Normalized Difference Water Index",
        kind: Water,
        formula: "(G - S1)/(G + S1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NDMI",
        long_name: "Normalized Difference Moisture Index",
        kind: Water,
        formula: "(N - S1)/(N + S1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "LSWI",
        long_name: "Land Surface Water Index",
        kind: Water,
        formula: "(N - S1)/(N + S1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "WI1",
        long_name: "Water Index 1",
        kind: Water,
        formula: "(G - S2)/(G + S2)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "WI2",
        long_name: "Water Index 2",
        kind: Water,
        formula: "(B - S2)/(B + S2)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "AWEInsh",
        long_name: "Automated Water Extraction Index (no shadow)",
        kind: Water,
        formula: "4.0*(G - S1) - (0.25*N + 2.75*S2)",
        params: &[],
        domain: (-5.0, 5.0),
    },
    CatalogEntry {
        name: "AWEIsh",
        long_name: "Automated Water Extraction Index (shadow)",
        kind: Water,
        formula: "B + 2.5*G - 1.5*(N + S1) - 0.25*S2",
        params: &[],
        domain: (-5.0, 5.0),
    },
    CatalogEntry {
        name: "MBWI",
        long_name: "Multi-Band Water Index",
        kind: Water,
        formula: "omega*G - R - N - S1 - S2",
        params: &[("omega", 2.0)],
        domain: (-5.0, 5.0),
    },
    CatalogEntry {
        name: "SWM",
        long_name: "Sentinel Water Mask",
        kind: Water,
        formula: "(B + G)/(N + S1)",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "ANDWI",
        long_name: "Augmented Normalized Difference Water Index",
        kind: Water,
        formula: "(B + G + R - N - S1 - S2)/(B + G + R + N + S1 + S2)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NWI",
        long_name: "New Water Index",
        kind: Water,
        formula: "(B - (N + S1 + S2))/(B + (N + S1 + S2))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MLSWI26",
        long_name: "Modified Land Surface Water Index (bands 2-6)",
        kind: Water,
        formula: "(1.0 - N - S1)/(1.0 - N + S1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MLSWI27",
        long_name: "Modified Land Surface Water Index (bands 2-7)",
        kind: Water,
        formula: "(1.0 - N - S2)/(1.0 - N + S2)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NDTI",
        long_name: "Normalized Difference Turbidity Index",
        kind: Water,
        formula: "(R - G)/(R + G)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "FAI",
        long_name: "Floating Algae Index",
        kind: Water,
        formula: "N - (R + (S1 - R)*((lambdaN - lambdaR)/(lambdaS1 - lambdaR)))",
        params: &[("lambdaN", 832.8), ("lambdaR", 664.6), ("lambdaS1", 1613.7)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "GVMI",
        long_name: "Global Vegetation Moisture Index",
        kind: Water,
        formula: "((N + 0.1) - (S1 + 0.02))/((N + 0.1) + (S1 + 0.02))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MSI",
        long_name: "Moisture Stress Index",
        kind: Water,
        formula: "S1/N",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "NMDI",
        long_name: "Normalized Multi-band Drought Index",
        kind: Water,
        formula: "(N - (S1 - S2))/(N + (S1 - S2))",
        params: &[],
        domain: (-1.0, 2.0),
    },
    CatalogEntry {
        name: "NDDI",
        long_name: "Normalized Difference Drought Index",
        kind: Water,
        formula: "((N - R)/(N + R) - (G - N)/(G + N))/((N - R)/(N + R) + (G - N)/(G + N))",
        params: &[],
        domain: (-10.0, 10.0),
    },
    // --- Snow & ice ---
    CatalogEntry {
        name: "NDSI",
        long_name: "Normalized Difference Snow Index",
        kind: Snow,
        formula: "(G - S1)/(G + S1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NDSII",
        long_name: "Normalized Difference Snow Ice Index",
        kind: Snow,
        formula: "(G - N)/(G + N)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NDGlaI",
        long_name: "Normalized Difference Glacier Index",
        kind: Snow,
        formula: "(G - R)/(G + R)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "S3",
        long_name: "S3 Snow Index",
        kind: Snow,
        formula: "(N*(R - S1))/((N + R)*(N + S1))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "SWI",
        long_name: "Snow Water Index",
        kind: Snow,
        formula: "(G*(N - S1))/((G + N)*(N + S1))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    // --- Burn ---
    CatalogEntry {
        name: "BAI",
        long_name: "Burned Area Index",
        kind: Burn,
        formula: "1.0/((0.1 - R)*(0.1 - R) + (0.06 - N)*(0.06 - N))",
        params: &[],
        domain: (0.0, 1000.0),
    },
    CatalogEntry {
        name: "NBR",
        long_name: "Normalized Burn Ratio",
        kind: Burn,
        formula: "(N - S2)/(N + S2)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NBR2",
        long_name: "Normalized Burn Ratio 2",
        kind: Burn,
        formula: "(S1 - S2)/(S1 + S2)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NBRT1",
        long_name: "Normalized Burn Ratio Thermal 1",
        kind: Burn,
        formula: "(N - S2*(T1/10000.0))/(N + S2*(T1/10000.0))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "NDVIT",
        long_name: "Normalized Difference Vegetation Index Thermal",
        kind: Burn,
        formula: "(N - R*(T1/10000.0))/(N + R*(T1/10000.0))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "SAVIT",
        long_name: "Soil Adjusted Vegetation Index Thermal",
        kind: Burn,
        formula: "(1.0 + L)*(N - R*(T1/10000.0))/(N + R*(T1/10000.0) + L)",
        params: &[("L", 0.5)],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "VI6T",
        long_name: "Vegetation Index 6 Thermal",
        kind: Burn,
        formula: "(N - T1/10000.0)/(N + T1/10000.0)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "MIRBI",
        long_name: "Mid-Infrared Burn Index",
        kind: Burn,
        formula: "10.0*S2 - 9.8*S1 + 2.0",
        params: &[],
        domain: (-10.0, 15.0),
    },
    CatalogEntry {
        name: "CSI",
        long_name: "Char Soil Index",
        kind: Burn,
        formula: "N/S2",
        params: &[],
        domain: (0.0, 10.0),
    },
    CatalogEntry {
        name: "BAIS2",
        long_name: "Burned Area Index for Sentinel-2",
        kind: Burn,
        formula: "(1.0 - sqrt((RE2*RE3*N2)/R))*((S2 - N2)/sqrt(S2 + N2) + 1.0)",
        params: &[],
        domain: (-1.0, 2.0),
    },
    // --- Soil & built-up ---
    CatalogEntry {
        name: "BI",
        long_name: "Bare Soil Index",
        kind: Soil,
        formula: "((S1 + R) - (N + B))/((S1 + R) + (N + B))",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "DBSI",
        long_name: "Dry Bare Soil Index",
        kind: Soil,
        formula: "(S1 - G)/(S1 + G) - (N - R)/(N + R)",
        params: &[],
        domain: (-2.0, 2.0),
    },
    CatalogEntry {
        name: "MBI",
        long_name: "Modified Bare Soil Index",
        kind: Soil,
        formula: "(S1 - S2 - N)/(S1 + S2 + N) + 0.5",
        params: &[],
        domain: (-0.5, 1.5),
    },
    CatalogEntry {
        name: "NDBI",
        long_name: "Normalized Difference Built-up Index",
        kind: Urban,
        formula: "(S1 - N)/(S1 + N)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "UI",
        long_name: "Urban Index",
        kind: Urban,
        formula: "(S2 - N)/(S2 + N)",
        params: &[],
        domain: (-1.0, 1.0),
    },
    CatalogEntry {
        name: "BLFEI",
        long_name: "Built-up Land Features Extraction Index",
        kind: Urban,
        formula: "((G + R + S2)/3.0 - S1)/((G + R + S2)/3.0 + S1)",
        params: &[],
        domain: (-1.0, 1.0),
    },
];
