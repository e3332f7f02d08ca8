//! Irrigation calculator service

use serde::{Deserialize, Serialize};
use shared::{calculate_irrigation, irrigation_crops, GrowthStage, IrrigationResult};
use validator::Validate;

use crate::error::AppResult;

/// Irrigation calculator service
#[derive(Clone, Default)]
pub struct IrrigationService;

/// Input for the irrigation calculator
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IrrigationInput {
    #[validate(length(min = 1, message = "Crop is required"))]
    pub crop: String,
    /// Stage identifier (`seedingStage`) or snake_case name (`seeding`)
    #[validate(length(min = 1, message = "Growth stage is required"))]
    pub growth_stage: String,
    pub field_area_hectares: f64,
}

/// Irrigation calculator output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationResponse {
    pub crop: String,
    pub growth_stage: GrowthStage,
    pub growth_stage_label: String,
    pub field_area_hectares: f64,
    #[serde(flatten)]
    pub result: IrrigationResult,
}

/// Stage identifier with its display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOption {
    pub key: String,
    pub label: String,
}

/// Choices offered by the irrigation form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationOptions {
    pub crops: Vec<String>,
    pub stages: Vec<StageOption>,
}

impl IrrigationService {
    pub fn new() -> Self {
        Self
    }

    /// Water requirement for a crop, stage and field size
    pub fn calculate(&self, input: &IrrigationInput) -> AppResult<IrrigationResponse> {
        input.validate()?;
        let stage: GrowthStage = input.growth_stage.parse()?;
        let result = calculate_irrigation(&input.crop, stage, input.field_area_hectares)?;

        tracing::debug!(
            "Irrigation for {} at {} over {} ha: {}-{} m3",
            input.crop,
            stage,
            input.field_area_hectares,
            result.total_min_volume_m3,
            result.total_max_volume_m3
        );

        Ok(IrrigationResponse {
            crop: input.crop.clone(),
            growth_stage: stage,
            growth_stage_label: stage.label().to_string(),
            field_area_hectares: input.field_area_hectares,
            result,
        })
    }

    /// Crop names and growth stages available to the calculator
    pub fn options(&self) -> IrrigationOptions {
        IrrigationOptions {
            crops: irrigation_crops().map(str::to_string).collect(),
            stages: GrowthStage::ALL
                .iter()
                .map(|stage| StageOption {
                    key: stage.key().to_string(),
                    label: stage.label().to_string(),
                })
                .collect(),
        }
    }
}
