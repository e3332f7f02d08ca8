//! HTTP handlers for the irrigation calculator

use axum::Json;

use crate::error::AppResult;
use crate::services::irrigation::{
    IrrigationInput, IrrigationOptions, IrrigationResponse, IrrigationService,
};

/// Calculate water requirement for a field
pub async fn calculate_irrigation(
    Json(input): Json<IrrigationInput>,
) -> AppResult<Json<IrrigationResponse>> {
    let service = IrrigationService::new();
    let response = service.calculate(&input)?;
    Ok(Json(response))
}

/// List crops and growth stages
pub async fn list_irrigation_options() -> Json<IrrigationOptions> {
    Json(IrrigationService::new().options())
}
