//! Calculation history service
//!
//! Records go through the [`HistoryStore`] port so handlers never touch the
//! database directly. [`PgHistoryStore`] is the production implementation.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::{CalculationKind, CalculationRecord};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Upper bound on records returned by one listing
pub const MAX_HISTORY_RECORDS: i64 = 100;

/// Persistence port for saved calculations
pub trait HistoryStore: Send + Sync {
    fn insert(&self, record: &CalculationRecord) -> impl Future<Output = AppResult<()>> + Send;

    /// Records for one user, newest first
    fn list_for_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> impl Future<Output = AppResult<Vec<CalculationRecord>>> + Send;
}

/// Postgres-backed history store
#[derive(Clone)]
pub struct PgHistoryStore {
    db: PgPool,
}

impl PgHistoryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CalculationRow {
    id: Uuid,
    user_id: String,
    kind: String,
    input: serde_json::Value,
    output: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl TryFrom<CalculationRow> for CalculationRecord {
    type Error = AppError;

    fn try_from(row: CalculationRow) -> Result<Self, Self::Error> {
        let kind: CalculationKind = row
            .kind
            .parse()
            .map_err(|_| AppError::Internal(format!("Unknown calculation kind '{}'", row.kind)))?;

        Ok(CalculationRecord {
            id: row.id,
            user_id: row.user_id,
            kind,
            input: row.input,
            output: row.output,
            created_at: row.created_at,
        })
    }
}

impl HistoryStore for PgHistoryStore {
    async fn insert(&self, record: &CalculationRecord) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO calculation_history (id, user_id, kind, input, output, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(record.id)
        .bind(&record.user_id)
        .bind(record.kind.as_str())
        .bind(&record.input)
        .bind(&record.output)
        .bind(record.created_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &str, limit: i64) -> AppResult<Vec<CalculationRecord>> {
        let rows = sqlx::query_as::<_, CalculationRow>(
            r#"
            SELECT id, user_id, kind, input, output, created_at
            FROM calculation_history
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(CalculationRecord::try_from).collect()
    }
}

/// Input for saving a calculation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveCalculationInput {
    #[validate(length(min = 1, max = 128, message = "User id must be 1-128 characters"))]
    pub user_id: String,
    pub kind: CalculationKind,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
}

/// Calculation history service
#[derive(Clone)]
pub struct HistoryService<S> {
    store: S,
}

impl<S: HistoryStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Save a calculation and return the stored record
    pub async fn save(&self, input: SaveCalculationInput) -> AppResult<CalculationRecord> {
        input.validate()?;
        let record = CalculationRecord::new(input.user_id, input.kind, input.input, input.output);
        self.store.insert(&record).await?;

        tracing::debug!("Saved {} calculation {}", record.kind, record.id);
        Ok(record)
    }

    /// Saved calculations for a user, newest first
    pub async fn list(&self, user_id: &str, limit: Option<i64>) -> AppResult<Vec<CalculationRecord>> {
        if user_id.trim().is_empty() {
            return Err(AppError::validation("user_id", "User id is required"));
        }
        let limit = limit.unwrap_or(MAX_HISTORY_RECORDS).clamp(1, MAX_HISTORY_RECORDS);
        self.store.list_for_user(user_id, limit).await
    }
}
