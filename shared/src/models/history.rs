//! Saved calculation history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AgroError;

/// Which tool produced a saved calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    Irrigation,
    Fertilizer,
    SoilDashboard,
    Harvest,
}

impl CalculationKind {
    /// Value stored in the `kind` column
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::Irrigation => "irrigation",
            CalculationKind::Fertilizer => "fertilizer",
            CalculationKind::SoilDashboard => "soil_dashboard",
            CalculationKind::Harvest => "harvest",
        }
    }
}

impl std::fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationKind::Irrigation => write!(f, "Irrigation"),
            CalculationKind::Fertilizer => write!(f, "Fertilizer"),
            CalculationKind::SoilDashboard => write!(f, "Soil Dashboard"),
            CalculationKind::Harvest => write!(f, "Harvest"),
        }
    }
}

impl std::str::FromStr for CalculationKind {
    type Err = AgroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "irrigation" => Ok(CalculationKind::Irrigation),
            "fertilizer" => Ok(CalculationKind::Fertilizer),
            "soil_dashboard" => Ok(CalculationKind::SoilDashboard),
            "harvest" => Ok(CalculationKind::Harvest),
            other => Err(AgroError::invalid_input(
                "kind",
                format!("unknown calculation kind '{}'", other),
            )),
        }
    }
}

/// A calculation a user chose to keep
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub user_id: String,
    pub kind: CalculationKind,
    /// Request payload as submitted
    pub input: serde_json::Value,
    /// Engine output as returned to the user
    pub output: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(
        user_id: impl Into<String>,
        kind: CalculationKind,
        input: serde_json::Value,
        output: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            kind,
            input,
            output,
            created_at: Utc::now(),
        }
    }
}
