//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel status returned when a value falls outside every band
pub const UNKNOWN_STATUS: &str = "Unknown";

/// A closed interval `[min, max]` tagged with a qualitative status label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeBand {
    pub min: f64,
    pub max: f64,
    #[serde(alias = "status")]
    pub label: String,
}

impl RangeBand {
    pub fn new(min: f64, max: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    /// Both ends are inclusive
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Borrowed form of [`RangeBand`] used by the compiled-in reference tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticBand {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
}

impl StaticBand {
    pub const fn new(min: f64, max: f64, label: &'static str) -> Self {
        Self { min, max, label }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<&StaticBand> for RangeBand {
    fn from(band: &StaticBand) -> Self {
        RangeBand::new(band.min, band.max, band.label)
    }
}

/// Water depth range in millimetres per day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WaterDepthRange {
    pub min_mm: f64,
    pub max_mm: f64,
}

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
