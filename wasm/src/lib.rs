//! WebAssembly module for the KhetSeva agronomy tools
//!
//! Provides client-side computation for:
//! - Band classification
//! - Irrigation water requirement
//! - Fertilizer recommendations and the soil dashboard
//! - Harvest (GDD) estimation
//! - Ideal growing conditions lookup
//! - Weather display helpers
//!
//! Structured results cross the boundary as JSON strings.

use std::collections::HashMap;

use serde::Serialize;
use shared::{AgroError, CropCategory, GrowthStage, NutrientLevels, RangeBand, SoilReadings};
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

fn engine_error(err: AgroError) -> String {
    err.to_string()
}

fn classify_json(value: f64, bands_json: &str) -> Result<String, String> {
    let bands: Vec<RangeBand> =
        serde_json::from_str(bands_json).map_err(|e| format!("Invalid bands JSON: {}", e))?;
    Ok(shared::classify(value, &bands).to_string())
}

fn irrigation_json(crop: &str, stage: &str, area_hectares: f64) -> Result<String, String> {
    let stage: GrowthStage = stage.parse().map_err(engine_error)?;
    let result = shared::calculate_irrigation(crop, stage, area_hectares).map_err(engine_error)?;
    to_json(&result)
}

fn fertilizer_json(levels_json: &str) -> Result<String, String> {
    let readings: HashMap<String, f64> =
        serde_json::from_str(levels_json).map_err(|e| format!("Invalid levels JSON: {}", e))?;
    let levels = NutrientLevels::from_map(&readings).map_err(engine_error)?;
    let report = shared::fertilizer_report(&levels).map_err(engine_error)?;
    to_json(&report)
}

fn soil_json(readings_json: &str) -> Result<String, String> {
    let readings: SoilReadings = serde_json::from_str(readings_json)
        .map_err(|e| format!("Invalid soil readings JSON: {}", e))?;
    let dashboard = shared::evaluate_soil(&readings).map_err(engine_error)?;
    to_json(&dashboard)
}

fn harvest_json(crop: &str, min_temp_c: f64, max_temp_c: f64, days: f64) -> Result<String, String> {
    let crop = Some(crop.trim()).filter(|c| !c.is_empty());
    let estimate =
        shared::estimate_harvest(crop, min_temp_c, max_temp_c, days).map_err(engine_error)?;
    to_json(&estimate)
}

fn ideal_json(category: &str, crop: &str) -> Result<String, String> {
    let category: CropCategory = category.parse().map_err(engine_error)?;
    let crop = Some(crop.trim()).filter(|c| !c.is_empty());
    let profile = shared::ideal_conditions(category, crop).map_err(engine_error)?;
    to_json(&profile)
}

/// Classify a value against a JSON band table (`[{min, max, label}]`)
#[wasm_bindgen]
pub fn classify_value(value: f64, bands_json: &str) -> Result<String, JsValue> {
    classify_json(value, bands_json).map_err(|e| JsValue::from_str(&e))
}

/// Water requirement for a crop at a growth stage, as JSON
#[wasm_bindgen]
pub fn calculate_irrigation(crop: &str, stage: &str, area_hectares: f64) -> Result<String, JsValue> {
    irrigation_json(crop, stage, area_hectares).map_err(|e| JsValue::from_str(&e))
}

/// Fertilizer report for JSON nutrient levels, as JSON
#[wasm_bindgen]
pub fn evaluate_fertilizer(levels_json: &str) -> Result<String, JsValue> {
    fertilizer_json(levels_json).map_err(|e| JsValue::from_str(&e))
}

/// Soil dashboard for a JSON soil test, as JSON
#[wasm_bindgen]
pub fn soil_dashboard(readings_json: &str) -> Result<String, JsValue> {
    soil_json(readings_json).map_err(|e| JsValue::from_str(&e))
}

/// GDD accumulation and days to harvest, as JSON. An empty crop name uses
/// the default profile.
#[wasm_bindgen]
pub fn calculate_harvest(
    crop: &str,
    min_temp_c: f64,
    max_temp_c: f64,
    elapsed_days: f64,
) -> Result<String, JsValue> {
    harvest_json(crop, min_temp_c, max_temp_c, elapsed_days).map_err(|e| JsValue::from_str(&e))
}

/// Ideal growing conditions for a crop in a category, as JSON. An empty crop
/// name selects the category's first crop.
#[wasm_bindgen]
pub fn ideal_growing_conditions(category: &str, crop: &str) -> Result<String, JsValue> {
    ideal_json(category, crop).map_err(|e| JsValue::from_str(&e))
}

/// Thermal profile key for a free-text crop name
#[wasm_bindgen]
pub fn normalize_crop(name: &str) -> String {
    shared::normalize_crop_name(Some(name)).to_string()
}

/// Description of a WMO weather code
#[wasm_bindgen]
pub fn weather_description(code: u8) -> String {
    shared::weather_code_description(code).to_string()
}

/// 16-point compass direction for a bearing
#[wasm_bindgen]
pub fn wind_direction(degrees: f64) -> String {
    shared::wind_direction(degrees).to_string()
}
