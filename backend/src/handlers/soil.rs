//! HTTP handlers for the soil dashboard

use axum::Json;
use shared::{SoilDashboard, SoilReadings};

use crate::error::AppResult;
use crate::services::soil::SoilService;

/// Evaluate a soil test into dashboard cards
pub async fn soil_dashboard(
    Json(readings): Json<SoilReadings>,
) -> AppResult<Json<SoilDashboard>> {
    let dashboard = SoilService::new().dashboard(&readings)?;
    Ok(Json(dashboard))
}
