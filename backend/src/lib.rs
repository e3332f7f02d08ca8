//! KhetSeva agronomy tools - HTTP server
//!
//! Exposes the irrigation, fertilizer, soil, harvest and weather tools over a
//! JSON API. The calculations themselves live in the `shared` crate.

use axum::{routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::WeatherClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Absent when no database URL is configured; history endpoints then
    /// answer 503
    pub db: Option<PgPool>,
    pub config: Arc<Config>,
    pub weather: WeatherClient,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "KhetSeva Agronomy Tools API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
