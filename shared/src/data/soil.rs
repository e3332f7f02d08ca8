//! Soil dashboard band tables
//!
//! Bands are closed on both ends and listed in scan order.

use crate::types::StaticBand as B;

pub const SOIL_MOISTURE: &[B] = &[
    B::new(0.0, 10.0, "Low"),
    B::new(10.0, 20.0, "Adequate"),
    B::new(20.0, 30.0, "Good"),
    B::new(30.0, 40.0, "Optimal"),
    B::new(40.0, 100.0, "High"),
];

pub const BULK_DENSITY: &[B] = &[
    B::new(0.0, 1.0, "Low"),
    B::new(1.0, 1.3, "Good"),
    B::new(1.3, 1.6, "Adequate"),
    B::new(1.6, 2.0, "Needs Attention"),
];

pub const POROSITY: &[B] = &[
    B::new(0.0, 30.0, "Low"),
    B::new(30.0, 45.0, "Adequate"),
    B::new(45.0, 55.0, "Good"),
    B::new(55.0, 100.0, "Excellent"),
];

pub const WATER_HOLDING_CAPACITY: &[B] = &[
    B::new(0.0, 20.0, "Low"),
    B::new(20.0, 30.0, "Adequate"),
    B::new(30.0, 40.0, "Good"),
    B::new(40.0, 100.0, "Excellent"),
];

pub const PH_LEVEL: &[B] = &[
    B::new(0.0, 5.5, "Acidic"),
    B::new(5.5, 6.5, "Slightly Acidic"),
    B::new(6.5, 7.5, "Optimal"),
    B::new(7.5, 8.5, "Slightly Alkaline"),
    B::new(8.5, 14.0, "Alkaline"),
];

pub const ELECTRICAL_CONDUCTIVITY: &[B] = &[
    B::new(0.0, 1.0, "Safe"),
    B::new(1.0, 2.0, "Adequate"),
    B::new(2.0, 3.0, "Needs Attention"),
    B::new(3.0, 10.0, "High"),
];

pub const ORGANIC_CARBON: &[B] = &[
    B::new(0.0, 0.5, "Low"),
    B::new(0.5, 1.0, "Adequate"),
    B::new(1.0, 2.0, "Good"),
    B::new(2.0, 10.0, "Optimal"),
];

pub const NITROGEN: &[B] = &[
    B::new(0.0, 50.0, "Low"),
    B::new(50.0, 100.0, "Adequate"),
    B::new(100.0, 200.0, "Good"),
    B::new(200.0, 1000.0, "Optimal"),
];

pub const PHOSPHORUS: &[B] = &[
    B::new(0.0, 10.0, "Low"),
    B::new(10.0, 20.0, "Needs Attention"),
    B::new(20.0, 40.0, "Adequate"),
    B::new(40.0, 100.0, "Optimal"),
];

pub const POTASSIUM: &[B] = &[
    B::new(0.0, 50.0, "Low"),
    B::new(50.0, 100.0, "Adequate"),
    B::new(100.0, 200.0, "Good"),
    B::new(200.0, 1000.0, "Optimal"),
];

pub const SULFUR: &[B] = &[
    B::new(0.0, 10.0, "Low"),
    B::new(10.0, 20.0, "Adequate"),
    B::new(20.0, 40.0, "Good"),
    B::new(40.0, 100.0, "Optimal"),
];

pub const CALCIUM: &[B] = &[
    B::new(0.0, 500.0, "Low"),
    B::new(500.0, 1000.0, "Adequate"),
    B::new(1000.0, 2000.0, "Good"),
    B::new(2000.0, 5000.0, "Optimal"),
];

pub const MAGNESIUM: &[B] = &[
    B::new(0.0, 100.0, "Low"),
    B::new(100.0, 250.0, "Adequate"),
    B::new(250.0, 500.0, "Good"),
    B::new(500.0, 1000.0, "Optimal"),
];

pub const TEMPERATURE: &[B] = &[
    B::new(0.0, 15.0, "Cool"),
    B::new(15.0, 25.0, "Optimal"),
    B::new(25.0, 35.0, "Warm"),
    B::new(35.0, 50.0, "Hot"),
];

pub const RAINFALL: &[B] = &[
    B::new(0.0, 300.0, "Low"),
    B::new(300.0, 600.0, "Adequate"),
    B::new(600.0, 1000.0, "Good"),
    B::new(1000.0, 2000.0, "High"),
];

pub const HUMIDITY: &[B] = &[
    B::new(0.0, 30.0, "Low"),
    B::new(30.0, 50.0, "Adequate"),
    B::new(50.0, 70.0, "Good"),
    B::new(70.0, 100.0, "High"),
];

pub const SOLAR_RADIATION: &[B] = &[
    B::new(0.0, 300.0, "Low"),
    B::new(300.0, 600.0, "Adequate"),
    B::new(600.0, 900.0, "Good"),
    B::new(900.0, 2000.0, "High"),
];

/// Gauge ranges for the dashboard progress bars, as `(min, max)`
pub mod progress {
    pub const SOIL_MOISTURE: (f64, f64) = (0.0, 40.0);
    pub const BULK_DENSITY: (f64, f64) = (0.5, 2.0);
    pub const POROSITY: (f64, f64) = (0.0, 60.0);
    pub const WATER_HOLDING_CAPACITY: (f64, f64) = (0.0, 50.0);
    pub const PH_LEVEL: (f64, f64) = (0.0, 14.0);
    pub const ELECTRICAL_CONDUCTIVITY: (f64, f64) = (0.0, 4.0);
    pub const ORGANIC_CARBON: (f64, f64) = (0.0, 3.0);
    pub const NITROGEN: (f64, f64) = (0.0, 300.0);
    pub const PHOSPHORUS: (f64, f64) = (0.0, 60.0);
    pub const POTASSIUM: (f64, f64) = (0.0, 500.0);
    pub const SULFUR: (f64, f64) = (0.0, 40.0);
    pub const CALCIUM: (f64, f64) = (0.0, 3000.0);
    pub const MAGNESIUM: (f64, f64) = (0.0, 500.0);
    pub const TEMPERATURE: (f64, f64) = (0.0, 35.0);
    pub const RAINFALL: (f64, f64) = (0.0, 1500.0);
    pub const HUMIDITY: (f64, f64) = (0.0, 90.0);
    pub const SOLAR_RADIATION: (f64, f64) = (0.0, 1200.0);
}

pub const SOIL_TEXTURE: &str = "Clay Loam";
pub const SOIL_TEXTURE_DESCRIPTION: &str = "Ideal for water retention and nutrient holding";
