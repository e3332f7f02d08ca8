//! HTTP handlers for the harvest estimator

use axum::Json;
use shared::{CropThermalProfile, HarvestEstimate};

use crate::error::AppResult;
use crate::services::harvest::{DaysRemainingResponse, HarvestInput, HarvestService};

/// Estimate GDD progress and days to harvest
pub async fn estimate_harvest(
    Json(input): Json<HarvestInput>,
) -> AppResult<Json<HarvestEstimate>> {
    let service = HarvestService::new();
    let estimate = service.estimate(&input)?;
    Ok(Json(estimate))
}

/// Whole days until harvest; 422 when it cannot be projected
pub async fn harvest_days_remaining(
    Json(input): Json<HarvestInput>,
) -> AppResult<Json<DaysRemainingResponse>> {
    let response = HarvestService::new().days_remaining(&input)?;
    Ok(Json(response))
}

/// List crop thermal profiles
pub async fn list_thermal_profiles() -> Json<Vec<CropThermalProfile>> {
    Json(HarvestService::new().profiles())
}
