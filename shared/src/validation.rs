//! Input validation for the agronomy engines

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{AgroError, AgroResult};
use crate::types::GpsCoordinates;

/// Open-Meteo serves between 1 and 16 forecast days
pub const MAX_FORECAST_DAYS: u32 = 16;

/// Reject NaN and infinities
pub fn validate_finite(field: &str, value: f64) -> AgroResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AgroError::invalid_input(field, "value must be a finite number"))
    }
}

/// Field area must be a finite number of hectares greater than zero
pub fn validate_field_area(area_hectares: f64) -> AgroResult<f64> {
    if area_hectares.is_finite() && area_hectares > 0.0 {
        Ok(area_hectares)
    } else {
        Err(AgroError::InvalidArea(area_hectares))
    }
}

/// Elapsed growing days must be finite and non-negative
pub fn validate_elapsed_days(days: f64) -> AgroResult<f64> {
    let days = validate_finite("elapsed_days", days)?;
    if days < 0.0 {
        return Err(AgroError::invalid_input(
            "elapsed_days",
            "elapsed days cannot be negative",
        ));
    }
    Ok(days)
}

/// Forecast length accepted by the weather provider
pub fn validate_forecast_days(days: u32) -> AgroResult<u32> {
    if (1..=MAX_FORECAST_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(AgroError::invalid_input(
            "days",
            format!("forecast days must be between 1 and {}", MAX_FORECAST_DAYS),
        ))
    }
}

/// Parse `"latitude,longitude"` text into coordinates
pub fn parse_coordinates(text: &str) -> AgroResult<GpsCoordinates> {
    let invalid = || {
        AgroError::invalid_input(
            "location",
            "Invalid coordinates format. Please use 'latitude,longitude'",
        )
    };

    let (lat_text, lon_text) = text.split_once(',').ok_or_else(invalid)?;
    let latitude = Decimal::from_str(lat_text.trim()).map_err(|_| invalid())?;
    let longitude = Decimal::from_str(lon_text.trim()).map_err(|_| invalid())?;

    validate_coordinates(&GpsCoordinates::new(latitude, longitude))
}

/// Latitude within ±90 and longitude within ±180
pub fn validate_coordinates(coords: &GpsCoordinates) -> AgroResult<GpsCoordinates> {
    if coords.latitude.abs() > Decimal::from(90) {
        return Err(AgroError::invalid_input(
            "latitude",
            "latitude must be between -90 and 90",
        ));
    }
    if coords.longitude.abs() > Decimal::from(180) {
        return Err(AgroError::invalid_input(
            "longitude",
            "longitude must be between -180 and 180",
        ));
    }
    Ok(coords.clone())
}
