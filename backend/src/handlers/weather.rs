//! HTTP handlers for weather forecasts

use axum::{
    extract::{Query, State},
    Json,
};
use shared::{HarvestOutlook, WeatherForecast};

use crate::error::AppResult;
use crate::services::weather::{ForecastQuery, HarvestOutlookQuery, WeatherService};
use crate::AppState;

/// Daily forecast for a city or coordinates
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<WeatherForecast>> {
    let service = WeatherService::new(state.weather.clone());
    let forecast = service.forecast(&query).await?;
    Ok(Json(forecast))
}

/// Harvest projection from forecast temperatures
pub async fn get_harvest_outlook(
    State(state): State<AppState>,
    Query(query): Query<HarvestOutlookQuery>,
) -> AppResult<Json<HarvestOutlook>> {
    let service = WeatherService::new(state.weather.clone());
    let outlook = service.harvest_outlook(&query).await?;
    Ok(Json(outlook))
}
