//! Crop thermal profiles and crop-name keywords for the GDD accumulator

/// Compiled-in thermal profile row
#[derive(Debug, Clone, Copy)]
pub struct ThermalRow {
    pub key: &'static str,
    pub name: &'static str,
    pub base_temperature_c: f64,
    pub gdd_to_harvest: f64,
    pub growing_season: &'static str,
    pub days_to_harvest: &'static str,
}

pub const THERMAL_TABLE: &[ThermalRow] = &[
    ThermalRow {
        key: "corn",
        name: "Corn",
        base_temperature_c: 10.0,
        gdd_to_harvest: 2700.0,
        growing_season: "Spring-Summer",
        days_to_harvest: "80-100",
    },
    ThermalRow {
        key: "millet",
        name: "Millet",
        base_temperature_c: 8.0,
        gdd_to_harvest: 1800.0,
        growing_season: "Summer",
        days_to_harvest: "60-90",
    },
    ThermalRow {
        key: "peanut",
        name: "Peanut",
        base_temperature_c: 10.0,
        gdd_to_harvest: 2500.0,
        growing_season: "Spring-Summer",
        days_to_harvest: "120-150",
    },
    ThermalRow {
        key: "rice",
        name: "Rice",
        base_temperature_c: 10.0,
        gdd_to_harvest: 2500.0,
        growing_season: "Spring-Summer",
        days_to_harvest: "105-150",
    },
    ThermalRow {
        key: "sugarcane",
        name: "Sugarcane",
        base_temperature_c: 12.0,
        gdd_to_harvest: 6000.0,
        growing_season: "Year-round",
        days_to_harvest: "270-365",
    },
    ThermalRow {
        key: "vegetable",
        name: "Vegetable",
        base_temperature_c: 8.0,
        gdd_to_harvest: 1500.0,
        growing_season: "Varies by type",
        days_to_harvest: "50-120",
    },
    ThermalRow {
        key: "wheat",
        name: "Wheat",
        base_temperature_c: 3.0,
        gdd_to_harvest: 2000.0,
        growing_season: "Fall-Spring",
        days_to_harvest: "120-240",
    },
];

/// Profile used when a crop name matches no keyword
pub const DEFAULT_THERMAL_KEY: &str = "wheat";

/// Ordered `(keyword, profile key)` pairs. First containment match wins, so
/// "sugar corn" resolves to corn and "cane sugar" to sugarcane via "cane".
pub const CROP_KEYWORDS: &[(&str, &str)] = &[
    ("corn", "corn"),
    ("maize", "corn"),
    ("millet", "millet"),
    ("peanut", "peanut"),
    ("rice", "rice"),
    ("cane", "sugarcane"),
    ("sugar", "sugarcane"),
    ("vegetable", "vegetable"),
    ("tomato", "vegetable"),
    ("potato", "vegetable"),
    ("onion", "vegetable"),
    ("lettuce", "vegetable"),
    ("cabbage", "vegetable"),
    ("wheat", "wheat"),
];
