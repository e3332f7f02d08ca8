//! Irrigation water requirement models

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::irrigation::{CropIrrigationRow, IRRIGATION_TABLE};
use crate::error::{AgroError, AgroResult};
use crate::types::WaterDepthRange;
use crate::validation::validate_field_area;

/// Cubic metres of water per millimetre of depth over one hectare
pub const CUBIC_METERS_PER_MM_HECTARE: f64 = 10.0;

/// Crop growth stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    #[serde(alias = "seedingStage", alias = "seeding_stage")]
    Seeding,
    #[serde(alias = "vegetativeStage", alias = "vegetative_stage")]
    Vegetative,
    #[serde(alias = "floweringFruitingStage", alias = "flowering_fruiting_stage")]
    FloweringFruiting,
    #[serde(alias = "maturityStage", alias = "maturity_stage")]
    Maturity,
}

impl GrowthStage {
    pub const ALL: [GrowthStage; 4] = [
        GrowthStage::Seeding,
        GrowthStage::Vegetative,
        GrowthStage::FloweringFruiting,
        GrowthStage::Maturity,
    ];

    /// Identifier used by the front end
    pub fn key(&self) -> &'static str {
        match self {
            GrowthStage::Seeding => "seedingStage",
            GrowthStage::Vegetative => "vegetativeStage",
            GrowthStage::FloweringFruiting => "floweringFruitingStage",
            GrowthStage::Maturity => "maturityStage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Seeding => "Seeding Stage",
            GrowthStage::Vegetative => "Vegetative Stage",
            GrowthStage::FloweringFruiting => "Flowering/Fruiting Stage",
            GrowthStage::Maturity => "Maturity Stage",
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GrowthStage {
    type Err = AgroError;

    /// Accepts `seedingStage`, `seeding_stage`, `seeding` or `Seeding Stage`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let normalized = normalized.strip_suffix("stage").unwrap_or(&normalized);

        match normalized {
            "seeding" => Ok(GrowthStage::Seeding),
            "vegetative" => Ok(GrowthStage::Vegetative),
            "floweringfruiting" | "flowering" | "fruiting" => Ok(GrowthStage::FloweringFruiting),
            "maturity" => Ok(GrowthStage::Maturity),
            _ => Err(AgroError::invalid_input(
                "growth_stage",
                format!("unknown growth stage '{}'", s),
            )),
        }
    }
}

/// Daily water depth per growth stage for one crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropIrrigationProfile {
    pub crop: String,
    pub stages: BTreeMap<GrowthStage, WaterDepthRange>,
}

impl CropIrrigationProfile {
    /// Build a profile from a reference row, parsing each `"X-Y mm"` range
    pub fn from_row(row: &CropIrrigationRow) -> AgroResult<Self> {
        let raw = [
            (GrowthStage::Seeding, row.seeding),
            (GrowthStage::Vegetative, row.vegetative),
            (GrowthStage::FloweringFruiting, row.flowering_fruiting),
            (GrowthStage::Maturity, row.maturity),
        ];

        let mut stages = BTreeMap::new();
        for (stage, text) in raw {
            stages.insert(stage, parse_depth_range(text)?);
        }

        Ok(Self {
            crop: row.crop.to_string(),
            stages,
        })
    }
}

/// Water requirement for a field at one growth stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IrrigationResult {
    pub min_depth_mm: f64,
    pub max_depth_mm: f64,
    pub total_min_volume_m3: f64,
    pub total_max_volume_m3: f64,
}

/// Parse a depth range written as `"X-Y mm"` (the unit suffix is optional)
pub fn parse_depth_range(text: &str) -> AgroResult<WaterDepthRange> {
    let trimmed = text.trim();
    let numeric = trimmed.strip_suffix("mm").unwrap_or(trimmed).trim();

    let (min_text, max_text) = numeric.split_once('-').ok_or_else(|| {
        AgroError::invalid_input("depth_range", format!("expected 'X-Y mm', got '{}'", text))
    })?;

    let parse = |part: &str| -> AgroResult<f64> {
        part.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| {
                AgroError::invalid_input("depth_range", format!("invalid depth '{}'", part.trim()))
            })
    };

    let min_mm = parse(min_text)?;
    let max_mm = parse(max_text)?;
    if min_mm > max_mm {
        return Err(AgroError::invalid_input(
            "depth_range",
            format!("minimum {} exceeds maximum {}", min_mm, max_mm),
        ));
    }

    Ok(WaterDepthRange { min_mm, max_mm })
}

/// Look up a crop's irrigation profile by its exact table name
pub fn find_irrigation_profile(crop: &str) -> AgroResult<CropIrrigationProfile> {
    IRRIGATION_TABLE
        .iter()
        .find(|row| row.crop == crop)
        .ok_or_else(|| AgroError::ProfileNotFound(crop.to_string()))
        .and_then(CropIrrigationProfile::from_row)
}

/// Crop names available in the irrigation table, in table order
pub fn irrigation_crops() -> impl Iterator<Item = &'static str> {
    IRRIGATION_TABLE.iter().map(|row| row.crop)
}

/// Compute depth bounds and total water volume for a field.
///
/// One millimetre of water over one hectare is ten cubic metres, so each
/// volume bound is `depth_mm * area_ha * 10`.
pub fn compute_water_requirement(
    profile: &CropIrrigationProfile,
    stage: GrowthStage,
    field_area_hectares: f64,
) -> AgroResult<IrrigationResult> {
    let depth = profile
        .stages
        .get(&stage)
        .ok_or_else(|| AgroError::StageNotFound {
            crop: profile.crop.clone(),
            stage: stage.key().to_string(),
        })?;

    validate_field_area(field_area_hectares)?;

    Ok(IrrigationResult {
        min_depth_mm: depth.min_mm,
        max_depth_mm: depth.max_mm,
        total_min_volume_m3: depth.min_mm * field_area_hectares * CUBIC_METERS_PER_MM_HECTARE,
        total_max_volume_m3: depth.max_mm * field_area_hectares * CUBIC_METERS_PER_MM_HECTARE,
    })
}

/// Table lookup followed by [`compute_water_requirement`]
pub fn calculate_irrigation(
    crop: &str,
    stage: GrowthStage,
    field_area_hectares: f64,
) -> AgroResult<IrrigationResult> {
    let profile = find_irrigation_profile(crop)?;
    compute_water_requirement(&profile, stage, field_area_hectares)
}
