//! Router-level tests for the calculator endpoints
//!
//! Requests go through the full axum router with `oneshot`, without a
//! database or network access.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use khetseva_server::{create_app, external::WeatherClient, AppState, Config};

fn test_app() -> Router {
    let state = AppState {
        db: None,
        config: Arc::new(Config::default()),
        weather: WeatherClient::with_base_url(
            "http://127.0.0.1:9/v1/forecast".to_string(),
            "http://127.0.0.1:9/v1/search".to_string(),
        ),
    };
    create_app(state)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(request).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(request).await
}

// ============================================================================
// Irrigation
// ============================================================================

#[cfg(test)]
mod irrigation_tests {
    use super::*;

    #[tokio::test]
    async fn test_rice_seeding_two_hectares() {
        let (status, body) = post_json(
            "/api/v1/tools/irrigation",
            json!({"crop": "Rice", "growth_stage": "seedingStage", "field_area_hectares": 2.0}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["min_depth_mm"], 6.0);
        assert_eq!(body["max_depth_mm"], 10.0);
        assert_eq!(body["total_min_volume_m3"], 120.0);
        assert_eq!(body["total_max_volume_m3"], 200.0);
        assert_eq!(body["growth_stage_label"], "Seeding Stage");
    }

    #[tokio::test]
    async fn test_zero_area_is_bad_request() {
        let (status, body) = post_json(
            "/api/v1/tools/irrigation",
            json!({"crop": "Rice", "growth_stage": "seeding", "field_area_hectares": 0.0}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_AREA");
        assert_eq!(body["error"]["field"], "field_area_hectares");
    }

    #[tokio::test]
    async fn test_unknown_crop_is_not_found() {
        let (status, body) = post_json(
            "/api/v1/tools/irrigation",
            json!({"crop": "Kiwi", "growth_stage": "seeding", "field_area_hectares": 1.0}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROFILE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_crops() {
        let (status, body) = get("/api/v1/tools/irrigation/crops").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crops"].as_array().unwrap().len(), 43);
        assert_eq!(body["stages"][0]["key"], "seedingStage");
    }
}

// ============================================================================
// Fertilizer, soil and classification
// ============================================================================

#[cfg(test)]
mod threshold_tests {
    use super::*;

    #[tokio::test]
    async fn test_nitrogen_deficient_fertilizer_report() {
        let (status, body) = post_json(
            "/api/v1/tools/fertilizer",
            json!({
                "Nitrogen_mg_kg": 15,
                "Phosphorus_mg_kg": 80,
                "Potassium_mg_kg": 300,
                "Sulfur_mg_kg": 30,
                "Calcium_mg_kg": 2500,
                "Magnesium_mg_kg": 300
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["nutrient_name"], "Nitrogen");
        assert_eq!(results[0]["status"], "deficient");
        assert_eq!(body["nutrient_status"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_missing_nutrient_is_bad_request() {
        let (status, body) =
            post_json("/api/v1/tools/fertilizer", json!({"nitrogen": 50})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_duplicate_nutrient_keys_are_bad_request() {
        let (status, body) = post_json(
            "/api/v1/tools/fertilizer",
            json!({
                "Nitrogen": 10,
                "nitrogen": 100,
                "Phosphorus": 80,
                "Potassium": 300,
                "Sulfur": 30,
                "Calcium": 2500,
                "Magnesium": 300
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "Nitrogen");
    }

    #[tokio::test]
    async fn test_soil_dashboard() {
        let (status, body) = post_json(
            "/api/v1/tools/soil-dashboard",
            json!({
                "Soil_Moisture_": 35,
                "Bulk_Density_g_cm3": 1.2,
                "Porosity_": 50,
                "Water_Holding_Capacity_": 45,
                "pH_Level": 6.5,
                "Electrical_Conductivity_dS_m": 0.5,
                "Organic_Carbon_": 1.5,
                "Nitrogen_mg_kg": 250,
                "Phosphorus_mg_kg": 15,
                "Potassium_mg_kg": 150,
                "Sulfur_mg_kg": 30,
                "Calcium_mg_kg": 2500,
                "Magnesium_mg_kg": 300,
                "Temperature_C": 22,
                "Rainfall_mm": 800,
                "Humidity_": 60,
                "Solar_Radiation_W_m2": 500
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["soil_texture"], "Clay Loam");
        let params = body["parameters"].as_array().unwrap();
        assert_eq!(params.len(), 17);
        let ph = params.iter().find(|p| p["parameter"] == "ph_level").unwrap();
        assert_eq!(ph["status"], "Slightly Acidic");
        let moisture = params.iter().find(|p| p["parameter"] == "soil_moisture").unwrap();
        assert_eq!(moisture["progress_percent"], 87.5);
    }

    #[tokio::test]
    async fn test_classify_custom_bands() {
        let (status, body) = post_json(
            "/api/v1/tools/classify",
            json!({
                "value": 7.0,
                "bands": [
                    {"min": 0.0, "max": 6.5, "label": "Acidic"},
                    {"min": 6.5, "max": 7.5, "status": "Optimal"}
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Optimal");
    }

    #[tokio::test]
    async fn test_classify_outside_bands_is_unknown() {
        let (status, body) = post_json(
            "/api/v1/tools/classify",
            json!({"value": 20.0, "bands": [{"min": 0.0, "max": 14.0, "label": "pH"}]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Unknown");
        assert_eq!(body["progress_percent"], 100.0);
    }
}

// ============================================================================
// Harvest
// ============================================================================

#[cfg(test)]
mod harvest_tests {
    use super::*;

    #[tokio::test]
    async fn test_wheat_thirty_days() {
        let (status, body) = post_json(
            "/api/v1/tools/harvest",
            json!({"crop": "Winter Wheat", "min_temp_c": 15, "max_temp_c": 25, "elapsed_days": 30}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["crop"], "Wheat");
        assert_eq!(body["state"]["daily_gdd"], 17.0);
        assert_eq!(body["state"]["total_gdd"], 510.0);
        assert_eq!(body["state"]["percent_complete"], 25.5);
        assert_eq!(body["state"]["estimated_days_remaining"]["state"], "days");
        assert_eq!(body["state"]["estimated_days_remaining"]["days"], 88);
    }

    #[tokio::test]
    async fn test_cold_weather_cannot_estimate() {
        let (status, body) = post_json(
            "/api/v1/tools/harvest",
            json!({"crop": "corn", "min_temp_c": 2, "max_temp_c": 8, "elapsed_days": 30}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["state"]["estimated_days_remaining"]["state"],
            "cannot_estimate"
        );
    }

    #[tokio::test]
    async fn test_days_remaining() {
        let (status, body) = post_json(
            "/api/v1/tools/harvest/days-remaining",
            json!({"crop": "wheat", "min_temp_c": 15, "max_temp_c": 25, "elapsed_days": 30}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days_remaining"], 88);
        assert_eq!(body["ready"], false);
    }

    #[tokio::test]
    async fn test_days_remaining_cold_weather_is_unprocessable() {
        let (status, body) = post_json(
            "/api/v1/tools/harvest/days-remaining",
            json!({"crop": "corn", "min_temp_c": 2, "max_temp_c": 8, "elapsed_days": 30}),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "CANNOT_ESTIMATE");
    }

    #[tokio::test]
    async fn test_overflowing_temperatures_are_bad_request() {
        let (status, body) = post_json(
            "/api/v1/tools/harvest",
            json!({"crop": "wheat", "min_temp_c": 1e308, "max_temp_c": 1e308, "elapsed_days": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_thermal_profiles() {
        let (status, body) = get("/api/v1/tools/harvest/profiles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 7);
    }
}

// ============================================================================
// Ideal growing conditions
// ============================================================================

#[cfg(test)]
mod ideal_conditions_tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_by_category_and_crop() {
        let (status, body) =
            get("/api/v1/tools/ideal-conditions?category=Vegetables&crop=Tomato").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Vegetables");
        assert_eq!(body["crop"], "Tomato");
        assert_eq!(body["ideal_conditions"]["nitrogen_ppm"], 100.23);
        assert_eq!(body["ideal_conditions"]["ph"], 5.98);
        assert_eq!(body["best_practices"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_default_is_first_fruit() {
        let (status, body) = get("/api/v1/tools/ideal-conditions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crop"], "Mango");
    }

    #[tokio::test]
    async fn test_unknown_crop_is_not_found() {
        let (status, body) =
            get("/api/v1/tools/ideal-conditions?category=Fruits&crop=Wheat").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROFILE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let (status, body) = get("/api/v1/tools/ideal-conditions?category=Herbs").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "category");
    }

    #[tokio::test]
    async fn test_catalogue() {
        let (status, body) = get("/api/v1/tools/ideal-conditions/crops").await;
        assert_eq!(status, StatusCode::OK);
        let categories = body.as_array().unwrap();
        assert_eq!(categories.len(), 3);
        let total: usize = categories
            .iter()
            .map(|c| c["crops"].as_array().unwrap().len())
            .sum();
        assert_eq!(total, 40);
    }
}

// ============================================================================
// Weather validation, history storage and health
// ============================================================================

#[cfg(test)]
mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_forecast_requires_location() {
        let (status, body) = get("/api/v1/weather/forecast").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "location");
    }

    #[tokio::test]
    async fn test_forecast_days_out_of_range() {
        let (status, body) = get("/api/v1/weather/forecast?location=Pune&days=17").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "days");
    }

    #[tokio::test]
    async fn test_forecast_malformed_coordinates() {
        let (status, body) = get("/api/v1/weather/forecast?location=28.6;77.2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "location");
    }

    #[tokio::test]
    async fn test_history_without_database_is_unavailable() {
        let (status, body) = get("/api/v1/history/farmer-1").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "STORAGE_UNAVAILABLE");

        let (status, _) = post_json(
            "/api/v1/history",
            json!({"user_id": "farmer-1", "kind": "irrigation", "input": {}, "output": {}}),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_reports_storage_state() {
        let (status, body) = get("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "not_configured");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// The endpoint reports the same volume law as the engine
        #[test]
        fn prop_irrigation_endpoint_volume_law(area in 0.1f64..100.0) {
            let (status, body) = runtime().block_on(post_json(
                "/api/v1/tools/irrigation",
                json!({"crop": "Wheat", "growth_stage": "vegetative", "field_area_hectares": area}),
            ));
            prop_assert_eq!(status, StatusCode::OK);

            let depth = body["min_depth_mm"].as_f64().unwrap();
            let volume = body["total_min_volume_m3"].as_f64().unwrap();
            prop_assert!((volume - depth * area * 10.0).abs() < 1e-6);
        }

        /// Harvest percent stays within 0-100 for any elapsed time
        #[test]
        fn prop_harvest_percent_bounded(days in 0.0f64..1000.0, min in -10.0f64..30.0) {
            let (status, body) = runtime().block_on(post_json(
                "/api/v1/tools/harvest",
                json!({"crop": "rice", "min_temp_c": min, "max_temp_c": min + 10.0, "elapsed_days": days}),
            ));
            prop_assert_eq!(status, StatusCode::OK);

            let percent = body["state"]["percent_complete"].as_f64().unwrap();
            prop_assert!((0.0..=100.0).contains(&percent));
        }
    }
}
