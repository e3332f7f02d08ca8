//! HTTP handler for ad-hoc band classification

use axum::Json;
use serde::{Deserialize, Serialize};
use shared::{band_span, classify, progress_percentage, validate_finite, RangeBand};

use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct ClassifyInput {
    pub value: f64,
    pub bands: Vec<RangeBand>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub status: String,
    pub progress_percent: f64,
}

/// Classify a value against a caller-supplied band table
pub async fn classify_value(Json(input): Json<ClassifyInput>) -> AppResult<Json<ClassifyResponse>> {
    let value = validate_finite("value", input.value)?;
    let progress_percent = band_span(&input.bands)
        .map(|(lo, hi)| progress_percentage(value, lo, hi))
        .unwrap_or(0.0);

    Ok(Json(ClassifyResponse {
        status: classify(value, &input.bands).to_string(),
        progress_percent,
    }))
}
