//! Weather forecast models and display helpers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::weather::{COMPASS_POINTS, WEATHER_CODES};
use crate::error::{AgroError, AgroResult};
use crate::models::harvest::{estimate_harvest, HarvestEstimate};
use crate::types::{GpsCoordinates, UNKNOWN_STATUS};

/// Where a forecast was fetched for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastLocation {
    /// Resolved place name when the request named a city
    pub name: Option<String>,
    pub coordinates: GpsCoordinates,
    pub timezone: String,
}

/// Forecast for a location, one entry per day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecast {
    pub location: ForecastLocation,
    pub days: Vec<DailyForecast>,
}

/// Daily forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: u8,
    pub description: String,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub sunrise: String,
    pub sunset: String,
    pub uv_index_max: f64,
    pub uv_level: UvLevel,
    pub precipitation_sum_mm: f64,
    pub precipitation_probability_percent: f64,
    pub precipitation_risk: PrecipitationRisk,
    pub wind_speed_max_kmh: f64,
    pub wind_direction_deg: f64,
    pub wind_direction: String,
    pub humidity_max_percent: f64,
}

/// UV exposure category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    pub fn from_index(uv_index: f64) -> Self {
        if uv_index <= 2.0 {
            UvLevel::Low
        } else if uv_index <= 5.0 {
            UvLevel::Moderate
        } else if uv_index <= 7.0 {
            UvLevel::High
        } else if uv_index <= 10.0 {
            UvLevel::VeryHigh
        } else {
            UvLevel::Extreme
        }
    }
}

impl std::fmt::Display for UvLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        };
        write!(f, "{}", label)
    }
}

/// Rain risk derived from precipitation probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationRisk {
    Low,
    Medium,
    High,
}

impl PrecipitationRisk {
    pub fn from_probability(probability_percent: f64) -> Self {
        if probability_percent < 30.0 {
            PrecipitationRisk::Low
        } else if probability_percent < 60.0 {
            PrecipitationRisk::Medium
        } else {
            PrecipitationRisk::High
        }
    }
}

/// Forecast-driven harvest projection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarvestOutlook {
    pub forecast_days: usize,
    pub average_min_temp_c: f64,
    pub average_max_temp_c: f64,
    pub estimate: HarvestEstimate,
}

/// Description for a WMO weather interpretation code
pub fn weather_code_description(code: u8) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, description)| *description)
        .unwrap_or(UNKNOWN_STATUS)
}

/// 16-point compass direction for a bearing in degrees
pub fn wind_direction(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return COMPASS_POINTS[0];
    }
    let index = (degrees / 22.5).round().rem_euclid(16.0) as usize;
    COMPASS_POINTS[index % 16]
}

/// Mean of the daily minimum and maximum temperatures
pub fn average_temperatures(days: &[DailyForecast]) -> Option<(f64, f64)> {
    if days.is_empty() {
        return None;
    }
    let count = days.len() as f64;
    let min = days.iter().map(|d| d.temperature_min_c).sum::<f64>() / count;
    let max = days.iter().map(|d| d.temperature_max_c).sum::<f64>() / count;
    Some((min, max))
}

/// Run the GDD accumulator at the forecast's average temperatures
pub fn harvest_outlook(
    crop: Option<&str>,
    days: &[DailyForecast],
    elapsed_days: f64,
) -> AgroResult<HarvestOutlook> {
    let (average_min_temp_c, average_max_temp_c) = average_temperatures(days)
        .ok_or_else(|| AgroError::invalid_input("forecast", "forecast contains no days"))?;
    let estimate = estimate_harvest(crop, average_min_temp_c, average_max_temp_c, elapsed_days)?;

    Ok(HarvestOutlook {
        forecast_days: days.len(),
        average_min_temp_c,
        average_max_temp_c,
        estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::harvest::DaysRemaining;

    fn day(min: f64, max: f64) -> DailyForecast {
        DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            weather_code: 0,
            description: weather_code_description(0).to_string(),
            temperature_max_c: max,
            temperature_min_c: min,
            sunrise: "2024-03-01T06:45".to_string(),
            sunset: "2024-03-01T18:20".to_string(),
            uv_index_max: 6.0,
            uv_level: UvLevel::from_index(6.0),
            precipitation_sum_mm: 0.0,
            precipitation_probability_percent: 10.0,
            precipitation_risk: PrecipitationRisk::from_probability(10.0),
            wind_speed_max_kmh: 12.0,
            wind_direction_deg: 270.0,
            wind_direction: wind_direction(270.0).to_string(),
            humidity_max_percent: 70.0,
        }
    }

    #[test]
    fn test_weather_code_description() {
        assert_eq!(weather_code_description(0), "Clear sky");
        assert_eq!(weather_code_description(63), "Moderate rain");
        assert_eq!(weather_code_description(99), "Thunderstorm with heavy hail");
        assert_eq!(weather_code_description(42), "Unknown");
    }

    #[test]
    fn test_wind_direction() {
        assert_eq!(wind_direction(0.0), "N");
        assert_eq!(wind_direction(22.5), "NNE");
        assert_eq!(wind_direction(90.0), "E");
        assert_eq!(wind_direction(200.0), "SSW");
        assert_eq!(wind_direction(350.0), "N");
        assert_eq!(wind_direction(360.0), "N");
        assert_eq!(wind_direction(-90.0), "W");
    }

    #[test]
    fn test_uv_level() {
        assert_eq!(UvLevel::from_index(2.0), UvLevel::Low);
        assert_eq!(UvLevel::from_index(2.1), UvLevel::Moderate);
        assert_eq!(UvLevel::from_index(7.0), UvLevel::High);
        assert_eq!(UvLevel::from_index(10.0), UvLevel::VeryHigh);
        assert_eq!(UvLevel::from_index(11.5), UvLevel::Extreme);
        assert_eq!(UvLevel::VeryHigh.to_string(), "Very High");
    }

    #[test]
    fn test_precipitation_risk() {
        assert_eq!(PrecipitationRisk::from_probability(0.0), PrecipitationRisk::Low);
        assert_eq!(PrecipitationRisk::from_probability(30.0), PrecipitationRisk::Medium);
        assert_eq!(PrecipitationRisk::from_probability(59.9), PrecipitationRisk::Medium);
        assert_eq!(PrecipitationRisk::from_probability(60.0), PrecipitationRisk::High);
    }

    #[test]
    fn test_harvest_outlook_averages_forecast() {
        let days = vec![day(14.0, 24.0), day(16.0, 26.0)];
        let outlook = harvest_outlook(Some("wheat"), &days, 30.0).unwrap();
        assert_eq!(outlook.forecast_days, 2);
        assert_eq!(outlook.average_min_temp_c, 15.0);
        assert_eq!(outlook.average_max_temp_c, 25.0);
        assert_eq!(outlook.estimate.state.total_gdd, 510.0);
        assert_eq!(
            outlook.estimate.state.estimated_days_remaining,
            DaysRemaining::Days(88)
        );
    }

    #[test]
    fn test_harvest_outlook_empty_forecast() {
        assert!(harvest_outlook(Some("wheat"), &[], 30.0).is_err());
    }
}
