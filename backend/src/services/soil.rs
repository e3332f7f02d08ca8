//! Soil dashboard service

use shared::{evaluate_soil, SoilDashboard, SoilReadings};

use crate::error::AppResult;

/// Soil dashboard service
#[derive(Clone, Default)]
pub struct SoilService;

impl SoilService {
    pub fn new() -> Self {
        Self
    }

    pub fn dashboard(&self, readings: &SoilReadings) -> AppResult<SoilDashboard> {
        let dashboard = evaluate_soil(readings)?;
        tracing::debug!(
            "Soil dashboard evaluated {} parameters",
            dashboard.parameters.len()
        );
        Ok(dashboard)
    }
}
