//! Growing degree day (GDD) accumulation and harvest projection

use serde::{Deserialize, Serialize};

use crate::data::thermal::{ThermalRow, CROP_KEYWORDS, DEFAULT_THERMAL_KEY, THERMAL_TABLE};
use crate::error::{AgroError, AgroResult};
use crate::validation::{validate_elapsed_days, validate_finite};

/// Heat requirements of a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropThermalProfile {
    pub crop: String,
    pub base_temperature_c: f64,
    pub gdd_required_to_harvest: f64,
    pub growing_season_label: String,
    pub typical_days_to_harvest_label: String,
}

impl From<&ThermalRow> for CropThermalProfile {
    fn from(row: &ThermalRow) -> Self {
        Self {
            crop: row.name.to_string(),
            base_temperature_c: row.base_temperature_c,
            gdd_required_to_harvest: row.gdd_to_harvest,
            growing_season_label: row.growing_season.to_string(),
            typical_days_to_harvest_label: row.days_to_harvest.to_string(),
        }
    }
}

/// Projected days until the crop reaches its GDD requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", content = "days", rename_all = "snake_case")]
pub enum DaysRemaining {
    Days(u64),
    /// Accumulated GDD already meets the requirement
    Ready,
    /// No heat accumulates per day, so no projection is possible
    CannotEstimate,
}

/// Result of one accumulation run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GddAccumulationState {
    pub daily_gdd: f64,
    pub total_gdd: f64,
    pub percent_complete: f64,
    pub estimated_days_remaining: DaysRemaining,
}

impl GddAccumulationState {
    pub fn is_ready(&self) -> bool {
        self.estimated_days_remaining == DaysRemaining::Ready
    }

    /// Days until harvest, zero when ready
    pub fn days_until_harvest(&self) -> AgroResult<u64> {
        match self.estimated_days_remaining {
            DaysRemaining::Days(days) => Ok(days),
            DaysRemaining::Ready => Ok(0),
            DaysRemaining::CannotEstimate => Err(AgroError::CannotEstimate),
        }
    }
}

/// Profile and accumulation state for a named crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarvestEstimate {
    pub profile: CropThermalProfile,
    pub state: GddAccumulationState,
}

/// Map a free-text crop name onto a thermal profile key.
///
/// The name is lowercased and checked against [`CROP_KEYWORDS`] in order;
/// the first keyword contained in the name wins. Missing or unmatched names
/// fall back to wheat.
pub fn normalize_crop_name(crop: Option<&str>) -> &'static str {
    let Some(crop) = crop else {
        return DEFAULT_THERMAL_KEY;
    };
    let lower = crop.to_lowercase();

    CROP_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, key)| *key)
        .unwrap_or(DEFAULT_THERMAL_KEY)
}

/// Look up a thermal profile by its normalized key
pub fn thermal_profile(key: &str) -> AgroResult<CropThermalProfile> {
    THERMAL_TABLE
        .iter()
        .find(|row| row.key == key)
        .map(CropThermalProfile::from)
        .ok_or_else(|| AgroError::ProfileNotFound(key.to_string()))
}

/// Normalize a free-text crop name and return its thermal profile
pub fn profile_for_crop(crop: Option<&str>) -> AgroResult<CropThermalProfile> {
    thermal_profile(normalize_crop_name(crop))
}

/// All thermal profiles in table order
pub fn thermal_profiles() -> Vec<CropThermalProfile> {
    THERMAL_TABLE.iter().map(CropThermalProfile::from).collect()
}

/// Daily GDD: mean temperature above the base, floored at zero
pub fn daily_gdd(min_temp_c: f64, max_temp_c: f64, base_temperature_c: f64) -> f64 {
    ((max_temp_c + min_temp_c) / 2.0 - base_temperature_c).max(0.0)
}

/// Accumulate GDD over `elapsed_days` of constant temperature.
///
/// Every day in the window is assumed to have the same min/max temperature,
/// so the total is `daily_gdd * elapsed_days`. The state is recomputed from
/// scratch on every call.
pub fn compute_gdd(
    min_temp_c: f64,
    max_temp_c: f64,
    elapsed_days: f64,
    profile: &CropThermalProfile,
) -> AgroResult<GddAccumulationState> {
    let min_temp_c = validate_finite("min_temp_c", min_temp_c)?;
    let max_temp_c = validate_finite("max_temp_c", max_temp_c)?;
    let elapsed_days = validate_elapsed_days(elapsed_days)?;
    let base = validate_finite("base_temperature_c", profile.base_temperature_c)?;
    let required = validate_finite("gdd_required_to_harvest", profile.gdd_required_to_harvest)?;
    if required <= 0.0 {
        return Err(AgroError::invalid_input(
            "gdd_required_to_harvest",
            "required GDD must be greater than zero",
        ));
    }

    let daily = daily_gdd(min_temp_c, max_temp_c, base);
    if !daily.is_finite() {
        return Err(AgroError::invalid_input(
            "temperature",
            "temperatures are too large to accumulate",
        ));
    }
    let total = daily * elapsed_days;
    if !total.is_finite() {
        return Err(AgroError::invalid_input(
            "elapsed_days",
            "accumulated GDD is too large to represent",
        ));
    }
    let percent_complete = (total / required * 100.0).min(100.0);

    let estimated_days_remaining = if total >= required {
        DaysRemaining::Ready
    } else if daily <= 0.0 {
        DaysRemaining::CannotEstimate
    } else {
        let days = ((required - total) / daily).ceil();
        if days.is_finite() {
            DaysRemaining::Days(days as u64)
        } else {
            DaysRemaining::CannotEstimate
        }
    };

    Ok(GddAccumulationState {
        daily_gdd: daily,
        total_gdd: total,
        percent_complete,
        estimated_days_remaining,
    })
}

/// Normalize the crop name, then run [`compute_gdd`]
pub fn estimate_harvest(
    crop: Option<&str>,
    min_temp_c: f64,
    max_temp_c: f64,
    elapsed_days: f64,
) -> AgroResult<HarvestEstimate> {
    let profile = profile_for_crop(crop)?;
    let state = compute_gdd(min_temp_c, max_temp_c, elapsed_days, &profile)?;
    Ok(HarvestEstimate { profile, state })
}
