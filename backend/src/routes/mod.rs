//! Route definitions for the KhetSeva API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/tools", tool_routes())
        .nest("/weather", weather_routes())
        .nest("/history", history_routes())
}

/// Calculator routes (stateless)
fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/irrigation", post(handlers::calculate_irrigation))
        .route("/irrigation/crops", get(handlers::list_irrigation_options))
        .route("/fertilizer", post(handlers::evaluate_fertilizer))
        .route("/soil-dashboard", post(handlers::soil_dashboard))
        .route("/classify", post(handlers::classify_value))
        .route("/harvest", post(handlers::estimate_harvest))
        .route("/harvest/days-remaining", post(handlers::harvest_days_remaining))
        .route("/harvest/profiles", get(handlers::list_thermal_profiles))
        .route("/ideal-conditions", get(handlers::get_ideal_conditions))
        .route("/ideal-conditions/crops", get(handlers::list_ideal_crops))
}

/// Weather forecast routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_forecast))
        .route("/harvest-outlook", get(handlers::get_harvest_outlook))
}

/// Calculation history routes
fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::save_calculation))
        .route("/:user_id", get(handlers::list_calculations))
}
