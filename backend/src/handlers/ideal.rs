//! HTTP handlers for the ideal growing conditions reference

use axum::{extract::Query, Json};
use shared::IdealCropProfile;

use crate::error::AppResult;
use crate::services::ideal::{CategoryCrops, IdealConditionsQuery, IdealConditionsService};

/// Reference card for `?category=&crop=`
pub async fn get_ideal_conditions(
    Query(query): Query<IdealConditionsQuery>,
) -> AppResult<Json<IdealCropProfile>> {
    let profile = IdealConditionsService::new().lookup(&query)?;
    Ok(Json(profile))
}

/// Categories and their crop names
pub async fn list_ideal_crops() -> Json<Vec<CategoryCrops>> {
    Json(IdealConditionsService::new().catalogue())
}
