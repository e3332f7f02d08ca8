//! HTTP handlers for saved calculations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::CalculationRecord;

use crate::error::{AppError, AppResult};
use crate::services::history::{HistoryService, PgHistoryStore, SaveCalculationInput};
use crate::AppState;

fn history_service(state: &AppState) -> AppResult<HistoryService<PgHistoryStore>> {
    let db = state.db.clone().ok_or(AppError::StorageUnavailable)?;
    Ok(HistoryService::new(PgHistoryStore::new(db)))
}

/// Save a calculation
pub async fn save_calculation(
    State(state): State<AppState>,
    Json(input): Json<SaveCalculationInput>,
) -> AppResult<Json<CalculationRecord>> {
    let service = history_service(&state)?;
    let record = service.save(input).await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// List a user's saved calculations, newest first
pub async fn list_calculations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<CalculationRecord>>> {
    let service = history_service(&state)?;
    let records = service.list(&user_id, query.limit).await?;
    Ok(Json(records))
}
