//! Weather forecast service

use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    harvest_outlook, parse_coordinates, validate_coordinates, validate_forecast_days,
    GpsCoordinates, HarvestOutlook, WeatherForecast,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// Forecast length used when the request does not say
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Weather service for forecast lookups
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

/// Where to fetch a forecast for: a city name, `"lat,lon"` text or
/// explicit coordinates
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ForecastQuery {
    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub days: Option<u32>,
}

/// Forecast query plus the crop being grown
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarvestOutlookQuery {
    pub location: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub days: Option<u32>,
    pub crop: Option<String>,
    pub elapsed_days: f64,
}

impl HarvestOutlookQuery {
    fn forecast_query(&self) -> ForecastQuery {
        ForecastQuery {
            location: self.location.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            days: self.days,
        }
    }
}

/// How a forecast location was given
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSpec {
    Coordinates(GpsCoordinates),
    Place(String),
}

/// Decide whether the query names coordinates or a place.
///
/// Explicit latitude/longitude win. Location text starting with a digit or
/// sign is parsed as `"lat,lon"`; anything else is a place name.
pub fn resolve_location(query: &ForecastQuery) -> AppResult<LocationSpec> {
    if let (Some(latitude), Some(longitude)) = (query.latitude, query.longitude) {
        let coords = validate_coordinates(&GpsCoordinates::new(latitude, longitude))?;
        return Ok(LocationSpec::Coordinates(coords));
    }

    let text = query
        .location
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AppError::validation("location", "Provide a location or latitude and longitude")
        })?;

    let looks_numeric = text
        .chars()
        .next()
        .map(|c| c.is_ascii_digit() || c == '-' || c == '+')
        .unwrap_or(false);

    if looks_numeric {
        Ok(LocationSpec::Coordinates(parse_coordinates(text)?))
    } else {
        Ok(LocationSpec::Place(text.to_string()))
    }
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Daily forecast for the requested location
    pub async fn forecast(&self, query: &ForecastQuery) -> AppResult<WeatherForecast> {
        query.validate()?;
        let days = validate_forecast_days(query.days.unwrap_or(DEFAULT_FORECAST_DAYS))?;

        match resolve_location(query)? {
            LocationSpec::Coordinates(coords) => self.client.get_forecast(&coords, days, None).await,
            LocationSpec::Place(name) => {
                let place = self.client.geocode(&name).await?;
                self.client
                    .get_forecast(&place.coordinates, days, Some(place.name))
                    .await
            }
        }
    }

    /// GDD projection driven by the forecast's average temperatures
    pub async fn harvest_outlook(&self, query: &HarvestOutlookQuery) -> AppResult<HarvestOutlook> {
        let forecast = self.forecast(&query.forecast_query()).await?;
        let outlook = harvest_outlook(query.crop.as_deref(), &forecast.days, query.elapsed_days)?;

        tracing::debug!(
            "Harvest outlook over {} forecast days: {:.1}-{:.1} C",
            outlook.forecast_days,
            outlook.average_min_temp_c,
            outlook.average_max_temp_c
        );

        Ok(outlook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_resolve_explicit_coordinates() {
        let query = ForecastQuery {
            location: Some("ignored".to_string()),
            latitude: Some(dec("28.61")),
            longitude: Some(dec("77.21")),
            days: None,
        };
        assert_eq!(
            resolve_location(&query).unwrap(),
            LocationSpec::Coordinates(GpsCoordinates::new(dec("28.61"), dec("77.21")))
        );
    }

    #[test]
    fn test_resolve_coordinate_text() {
        let query = ForecastQuery {
            location: Some("-33.86, 151.21".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_location(&query).unwrap(),
            LocationSpec::Coordinates(GpsCoordinates::new(dec("-33.86"), dec("151.21")))
        );
    }

    #[test]
    fn test_resolve_place_name() {
        let query = ForecastQuery {
            location: Some("  Pune ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_location(&query).unwrap(),
            LocationSpec::Place("Pune".to_string())
        );
    }

    #[test]
    fn test_resolve_malformed_coordinates() {
        let query = ForecastQuery {
            location: Some("28.6;77.2".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_location(&query),
            Err(AppError::Agro(shared::AgroError::InvalidInput { .. }))
        ));
    }

    #[test]
    fn test_resolve_requires_location() {
        let query = ForecastQuery::default();
        assert!(matches!(
            resolve_location(&query),
            Err(AppError::Validation { .. })
        ));
    }
}
