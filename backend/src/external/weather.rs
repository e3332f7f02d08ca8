//! Weather API client for fetching forecast data
//!
//! Integrates with the Open-Meteo forecast and geocoding APIs. Neither needs
//! an API key.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    weather_code_description, wind_direction, DailyForecast, ForecastLocation, GpsCoordinates,
    PrecipitationRisk, UvLevel, WeatherForecast,
};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Daily variables requested from the forecast API
const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min,sunrise,sunset,\
uv_index_max,precipitation_sum,precipitation_probability_max,\
windspeed_10m_max,winddirection_10m_dominant,relative_humidity_2m_max";

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    forecast_url: String,
    geocoding_url: String,
}

/// A place resolved by the geocoding API
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub name: String,
    pub coordinates: GpsCoordinates,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
pub struct OpenMeteoForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    pub daily: OpenMeteoDaily,
}

/// Column-oriented daily series, one entry per forecast day
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OpenMeteoDaily {
    pub time: Vec<String>,
    pub weathercode: Vec<Option<u8>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub sunrise: Vec<Option<String>>,
    pub sunset: Vec<Option<String>>,
    pub uv_index_max: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub windspeed_10m_max: Vec<Option<f64>>,
    pub winddirection_10m_dominant: Vec<Option<f64>>,
    pub relative_humidity_2m_max: Vec<Option<f64>>,
}

/// Open-Meteo geocoding response
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            forecast_url: config.forecast_endpoint.clone(),
            geocoding_url: config.geocoding_endpoint.clone(),
        })
    }

    /// Create a new WeatherClient with custom base URLs (for testing)
    pub fn with_base_url(forecast_url: String, geocoding_url: String) -> Self {
        Self {
            client: Client::new(),
            forecast_url,
            geocoding_url,
        }
    }

    /// Resolve a city name to coordinates (first match only)
    pub async fn geocode(&self, name: &str) -> AppResult<GeocodedPlace> {
        tracing::info!("Geocoding location '{}'", name);

        let response = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", name), ("count", "1")])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Geocoding request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Geocoding API error: {} - {}", status, body);
            return Err(AppError::ExternalService(format!(
                "Geocoding API error: {}",
                status
            )));
        }

        let data: GeocodingResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse geocoding response: {}", e))
        })?;

        first_place(data)
    }

    /// Fetch a daily forecast by GPS coordinates
    pub async fn get_forecast(
        &self,
        coordinates: &GpsCoordinates,
        days: u32,
        place_name: Option<String>,
    ) -> AppResult<WeatherForecast> {
        tracing::info!(
            "Fetching {} day forecast for {},{}",
            days,
            coordinates.latitude,
            coordinates.longitude
        );

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", days.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Forecast request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Forecast API error: {} - {}", status, body);
            return Err(AppError::ExternalService(format!(
                "Forecast API error: {}",
                status
            )));
        }

        let data: OpenMeteoForecastResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse forecast response: {}", e))
        })?;

        convert_forecast_response(data, place_name)
    }
}

/// Pick the first geocoding hit, or report the location as not found
pub fn first_place(data: GeocodingResponse) -> AppResult<GeocodedPlace> {
    let place = data
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| AppError::NotFound("Location".to_string()))?;

    let name = match place.country {
        Some(country) => format!("{}, {}", place.name, country),
        None => place.name,
    };

    Ok(GeocodedPlace {
        name,
        coordinates: coordinates_from_f64(place.latitude, place.longitude)?,
    })
}

/// Convert the column-oriented Open-Meteo response into per-day forecasts
pub fn convert_forecast_response(
    data: OpenMeteoForecastResponse,
    place_name: Option<String>,
) -> AppResult<WeatherForecast> {
    let daily = &data.daily;
    let value = |series: &[Option<f64>], i: usize| series.get(i).copied().flatten();

    let mut days = Vec::with_capacity(daily.time.len());
    for (i, date_text) in daily.time.iter().enumerate() {
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|e| {
            AppError::ExternalService(format!("Invalid forecast date '{}': {}", date_text, e))
        })?;
        let (Some(temperature_max_c), Some(temperature_min_c)) = (
            value(&daily.temperature_2m_max, i),
            value(&daily.temperature_2m_min, i),
        ) else {
            return Err(AppError::ExternalService(format!(
                "Forecast for {} is missing temperatures",
                date_text
            )));
        };

        let weather_code = daily.weathercode.get(i).copied().flatten().unwrap_or(0);
        let uv_index_max = value(&daily.uv_index_max, i).unwrap_or(0.0);
        let precipitation_probability_percent =
            value(&daily.precipitation_probability_max, i).unwrap_or(0.0);
        let wind_direction_deg = value(&daily.winddirection_10m_dominant, i).unwrap_or(0.0);
        let text = |series: &[Option<String>]| series.get(i).cloned().flatten().unwrap_or_default();

        days.push(DailyForecast {
            date,
            weather_code,
            description: weather_code_description(weather_code).to_string(),
            temperature_max_c,
            temperature_min_c,
            sunrise: text(&daily.sunrise),
            sunset: text(&daily.sunset),
            uv_index_max,
            uv_level: UvLevel::from_index(uv_index_max),
            precipitation_sum_mm: value(&daily.precipitation_sum, i).unwrap_or(0.0),
            precipitation_probability_percent,
            precipitation_risk: PrecipitationRisk::from_probability(
                precipitation_probability_percent,
            ),
            wind_speed_max_kmh: value(&daily.windspeed_10m_max, i).unwrap_or(0.0),
            wind_direction_deg,
            wind_direction: wind_direction(wind_direction_deg).to_string(),
            humidity_max_percent: value(&daily.relative_humidity_2m_max, i).unwrap_or(0.0),
        });
    }

    Ok(WeatherForecast {
        location: ForecastLocation {
            name: place_name,
            coordinates: coordinates_from_f64(data.latitude, data.longitude)?,
            timezone: data.timezone,
        },
        days,
    })
}

fn coordinates_from_f64(latitude: f64, longitude: f64) -> AppResult<GpsCoordinates> {
    let convert = |v: f64| {
        Decimal::from_f64(v)
            .ok_or_else(|| AppError::ExternalService(format!("Invalid coordinate {}", v)))
    };
    Ok(GpsCoordinates::new(convert(latitude)?, convert(longitude)?))
}
