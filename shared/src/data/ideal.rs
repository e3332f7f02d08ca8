//! Ideal growing conditions reference, grouped by category
//!
//! Nutrients are in ppm, rainfall in mm. Category and crop order is the
//! order shown to the user.

/// Compiled-in ideal-conditions row
#[derive(Debug, Clone, Copy)]
pub struct IdealRow {
    pub crop: &'static str,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub ph: f64,
    pub rainfall_mm: f64,
    pub best_practices: [&'static str; 3],
}

/// `[N, P, K, temperature, humidity, pH, rainfall]`
const fn row(crop: &'static str, v: [f64; 7], best_practices: [&'static str; 3]) -> IdealRow {
    IdealRow {
        crop,
        nitrogen: v[0],
        phosphorus: v[1],
        potassium: v[2],
        temperature_c: v[3],
        humidity_percent: v[4],
        ph: v[5],
        rainfall_mm: v[6],
        best_practices,
    }
}

pub const FRUITS: &[IdealRow] = &[
    row(
        "Mango",
        [150.0, 50.0, 150.0, 24.0, 60.0, 5.5, 1000.0],
        [
            "Prune regularly to maintain tree health.",
            "Apply organic manure during the flowering stage.",
            "Ensure well-drained soil to prevent root rot.",
        ],
    ),
    row(
        "Banana",
        [200.0, 60.0, 250.0, 27.0, 75.0, 6.5, 2000.0],
        [
            "Use drip irrigation for efficient water management.",
            "Apply potassium-rich fertilizers for better fruit quality.",
            "Protect from strong winds using windbreaks.",
        ],
    ),
    row(
        "Apple",
        [100.0, 40.0, 150.0, 15.0, 50.0, 6.0, 1200.0],
        [
            "Prune trees to improve air circulation and sunlight penetration.",
            "Apply calcium sprays to prevent bitter pit disorder.",
            "Use mulch to retain soil moisture and suppress weeds.",
        ],
    ),
    row(
        "Grapes",
        [80.0, 30.0, 150.0, 22.0, 55.0, 6.5, 900.0],
        [
            "Train vines properly to maximize sunlight exposure.",
            "Apply fungicides to prevent powdery mildew.",
            "Harvest at the right sugar-acid balance for best quality.",
        ],
    ),
    row(
        "Orange",
        [120.0, 40.0, 180.0, 25.0, 65.0, 6.0, 1500.0],
        [
            "Use drip irrigation to maintain consistent soil moisture.",
            "Apply micronutrients like zinc and iron for healthy fruiting.",
            "Control pests like citrus psyllid to prevent disease.",
        ],
    ),
    row(
        "Guava",
        [100.0, 30.0, 120.0, 23.0, 70.0, 6.5, 1200.0],
        [
            "Prune trees to increase fruit yield and reduce disease risks.",
            "Apply organic mulch to conserve moisture.",
            "Use balanced fertilization with nitrogen and potassium.",
        ],
    ),
    row(
        "Pomegranate",
        [90.0, 40.0, 150.0, 28.0, 50.0, 6.5, 500.0],
        [
            "Train branches for better sunlight penetration.",
            "Use organic mulch to retain soil moisture.",
            "Apply potassium-rich fertilizers for better fruit set.",
        ],
    ),
    row(
        "Papaya",
        [150.0, 60.0, 200.0, 26.0, 80.0, 6.5, 1500.0],
        [
            "Avoid water stagnation to prevent root rot.",
            "Regularly monitor for viral diseases like papaya ringspot virus.",
            "Provide staking support for young plants.",
        ],
    ),
    row(
        "Pineapple",
        [100.0, 40.0, 250.0, 30.0, 75.0, 5.5, 1200.0],
        [
            "Maintain proper spacing for airflow and disease control.",
            "Apply nitrogen fertilizers for faster vegetative growth.",
            "Mulch to control weeds and conserve moisture.",
        ],
    ),
    row(
        "Watermelon",
        [80.0, 50.0, 180.0, 28.0, 65.0, 6.5, 800.0],
        [
            "Ensure well-drained soil to prevent root diseases.",
            "Use plastic mulch to conserve soil moisture.",
            "Irrigate at flowering and fruiting stages for better yield.",
        ],
    ),
    row(
        "Muskmelon",
        [70.0, 40.0, 160.0, 27.0, 60.0, 6.5, 750.0],
        [
            "Provide trellis support for better fruit quality.",
            "Use drip irrigation to maintain consistent soil moisture.",
            "Control pests like aphids to prevent viral diseases.",
        ],
    ),
    row(
        "Lemon",
        [120.0, 50.0, 150.0, 25.0, 60.0, 6.0, 1400.0],
        [
            "Prune to shape and improve air circulation.",
            "Apply organic compost for better soil fertility.",
            "Protect from citrus leaf miner and aphids.",
        ],
    ),
    row(
        "Litchi",
        [100.0, 40.0, 120.0, 22.0, 70.0, 6.5, 1500.0],
        [
            "Maintain high humidity to prevent fruit cracking.",
            "Apply organic manure during flowering.",
            "Provide wind protection to avoid flower drop.",
        ],
    ),
    row(
        "Jackfruit",
        [120.0, 40.0, 200.0, 28.0, 75.0, 6.0, 1800.0],
        [
            "Use organic mulch to retain soil moisture.",
            "Regularly prune to encourage fruiting.",
            "Apply fertilizers with micronutrients for better growth.",
        ],
    ),
    row(
        "Coconut",
        [150.0, 60.0, 250.0, 30.0, 80.0, 6.0, 2000.0],
        [
            "Apply salt or potassium to increase yield.",
            "Provide irrigation during drought periods.",
            "Protect young seedlings from pests like rhinoceros beetles.",
        ],
    ),
];

pub const FIELD_CROPS: &[IdealRow] = &[
    row(
        "Rice",
        [80.5, 45.3, 40.1, 24.5, 82.5, 6.5, 230.2],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Wheat",
        [75.2, 50.7, 42.8, 20.2, 60.3, 6.8, 120.5],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Maize",
        [78.4, 48.6, 39.5, 22.5, 65.9, 6.3, 85.7],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Sugarcane",
        [120.3, 60.5, 55.7, 28.5, 75.3, 5.9, 180.6],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Cotton",
        [110.7, 47.9, 50.3, 25.1, 78.5, 6.7, 90.4],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Chickpea (Gram)",
        [42.5, 68.2, 75.1, 18.9, 55.8, 7.2, 82.3],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Pigeon Peas (Arhar/Tur)",
        [20.5, 65.3, 22.7, 27.1, 50.4, 6.4, 130.7],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Groundnut",
        [25.7, 52.9, 28.4, 29.3, 45.6, 6.1, 100.2],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Mustard",
        [30.4, 58.1, 35.6, 22.7, 40.2, 6.7, 75.8],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Barley",
        [65.9, 48.5, 41.3, 19.5, 58.9, 6.9, 110.6],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Jowar (Sorghum)",
        [55.2, 49.6, 38.7, 26.3, 54.1, 6.5, 90.3],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Bajra (Pearl Millet)",
        [50.1, 46.2, 37.8, 28.0, 42.7, 6.3, 70.9],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Sunflower",
        [40.6, 55.8, 45.7, 25.5, 48.9, 6.2, 95.5],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Soybean",
        [78.3, 50.5, 47.2, 27.6, 52.4, 6.4, 105.3],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
    row(
        "Sesame",
        [30.2, 45.1, 33.6, 30.0, 38.5, 6.0, 85.0],
        [
            "Use data-driven decision making for precision farming.",
            "Regularly monitor and adjust soil nutrients based on real-time conditions.",
            "Integrate IoT sensors and AI to improve yield predictions.",
        ],
    ),
];

pub const VEGETABLES: &[IdealRow] = &[
    row(
        "Potato",
        [79.89, 47.88, 39.87, 23.19, 82.17, 6.38, 236.18],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Tomato",
        [100.23, 82.01, 50.05, 27.38, 80.36, 5.98, 104.63],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Onion",
        [20.75, 67.54, 20.05, 20.05, 21.61, 5.78, 105.92],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Brinjal",
        [40.02, 67.47, 19.24, 29.12, 65.12, 7.13, 67.88],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Cauliflower",
        [20.99, 47.28, 19.87, 28.27, 85.95, 6.74, 48.44],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Cabbage",
        [101.2, 28.74, 29.94, 25.54, 58.87, 6.81, 158.07],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Carrot",
        [23.18, 132.53, 200.11, 23.87, 81.87, 6.25, 69.91],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Green Peas",
        [20.73, 67.73, 20.29, 27.74, 48.06, 5.79, 149.46],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Lady Finger",
        [49.88, 59.05, 50.04, 33.72, 92.4, 6.74, 142.63],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
    row(
        "Spinach",
        [18.77, 66.36, 19.41, 24.51, 64.8, 6.99, 45.68],
        [
            "Ensure proper soil testing before planting to maintain optimal nutrient balance.",
            "Maintain appropriate irrigation practices to avoid overwatering or drought stress.",
            "Regularly monitor pH levels to ensure they remain within the suitable range.",
        ],
    ),
];
