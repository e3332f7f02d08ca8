//! Harvest estimation service built on growing degree days

use serde::{Deserialize, Serialize};
use shared::{estimate_harvest, thermal_profiles, CropThermalProfile, HarvestEstimate};

use crate::error::AppResult;

/// Harvest estimation service
#[derive(Clone, Default)]
pub struct HarvestService;

/// Input for the harvest estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestInput {
    /// Free-text crop name, matched by keyword. Defaults to wheat.
    pub crop: Option<String>,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub elapsed_days: f64,
}

/// Days left until harvest for one crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaysRemainingResponse {
    pub crop: String,
    pub ready: bool,
    pub days_remaining: u64,
}

impl HarvestService {
    pub fn new() -> Self {
        Self
    }

    /// Accumulated GDD and projected days to harvest
    pub fn estimate(&self, input: &HarvestInput) -> AppResult<HarvestEstimate> {
        let estimate = estimate_harvest(
            input.crop.as_deref(),
            input.min_temp_c,
            input.max_temp_c,
            input.elapsed_days,
        )?;

        tracing::debug!(
            "GDD for {}: {} total, {}% complete, {:?}",
            estimate.profile.crop,
            estimate.state.total_gdd,
            estimate.state.percent_complete,
            estimate.state.estimated_days_remaining
        );

        Ok(estimate)
    }

    /// Whole days left until harvest. Fails with `CannotEstimate` when no
    /// heat accumulates and the crop is not yet ready.
    pub fn days_remaining(&self, input: &HarvestInput) -> AppResult<DaysRemainingResponse> {
        let estimate = self.estimate(input)?;
        let days_remaining = estimate.state.days_until_harvest()?;

        Ok(DaysRemainingResponse {
            crop: estimate.profile.crop,
            ready: estimate.state.is_ready(),
            days_remaining,
        })
    }

    /// Thermal profiles known to the estimator
    pub fn profiles(&self) -> Vec<CropThermalProfile> {
        thermal_profiles()
    }
}
