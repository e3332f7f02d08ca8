//! HTTP handlers for the fertilizer recommendation tool

use std::collections::HashMap;

use axum::Json;
use shared::FertilizerReport;

use crate::error::AppResult;
use crate::services::nutrient::NutrientService;

/// Evaluate nutrient levels into fertilizer recommendations
pub async fn evaluate_fertilizer(
    Json(readings): Json<HashMap<String, f64>>,
) -> AppResult<Json<FertilizerReport>> {
    let service = NutrientService::new();
    let report = service.evaluate(&readings)?;
    Ok(Json(report))
}
