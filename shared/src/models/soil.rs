//! Soil dashboard models

use serde::{Deserialize, Serialize};

use crate::data::soil::{self, SOIL_TEXTURE, SOIL_TEXTURE_DESCRIPTION};
use crate::error::AgroResult;
use crate::models::threshold::{classify, progress_percentage};
use crate::types::{RangeBand, StaticBand};
use crate::validation::validate_finite;

/// Soil test form values, keyed the way the soil analysis form submits them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilReadings {
    #[serde(rename = "Soil_Moisture_")]
    pub soil_moisture_percent: f64,
    #[serde(rename = "Bulk_Density_g_cm3")]
    pub bulk_density_g_cm3: f64,
    #[serde(rename = "Porosity_")]
    pub porosity_percent: f64,
    #[serde(rename = "Water_Holding_Capacity_")]
    pub water_holding_capacity_percent: f64,
    #[serde(rename = "pH_Level")]
    pub ph_level: f64,
    #[serde(rename = "Electrical_Conductivity_dS_m")]
    pub electrical_conductivity_ds_m: f64,
    #[serde(rename = "Organic_Carbon_")]
    pub organic_carbon_percent: f64,
    #[serde(rename = "Nitrogen_mg_kg")]
    pub nitrogen_mg_kg: f64,
    #[serde(rename = "Phosphorus_mg_kg")]
    pub phosphorus_mg_kg: f64,
    #[serde(rename = "Potassium_mg_kg")]
    pub potassium_mg_kg: f64,
    #[serde(rename = "Sulfur_mg_kg")]
    pub sulfur_mg_kg: f64,
    #[serde(rename = "Calcium_mg_kg")]
    pub calcium_mg_kg: f64,
    #[serde(rename = "Magnesium_mg_kg")]
    pub magnesium_mg_kg: f64,
    #[serde(rename = "Temperature_C")]
    pub temperature_c: f64,
    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,
    #[serde(rename = "Humidity_")]
    pub humidity_percent: f64,
    #[serde(rename = "Solar_Radiation_W_m2")]
    pub solar_radiation_w_m2: f64,
}

/// Parameters shown on the soil dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilParameter {
    SoilMoisture,
    BulkDensity,
    Porosity,
    WaterHoldingCapacity,
    PhLevel,
    ElectricalConductivity,
    OrganicCarbon,
    Nitrogen,
    Phosphorus,
    Potassium,
    Sulfur,
    Calcium,
    Magnesium,
    Temperature,
    Rainfall,
    Humidity,
    SolarRadiation,
}

impl SoilParameter {
    pub const ALL: [SoilParameter; 17] = [
        SoilParameter::SoilMoisture,
        SoilParameter::BulkDensity,
        SoilParameter::Porosity,
        SoilParameter::WaterHoldingCapacity,
        SoilParameter::PhLevel,
        SoilParameter::ElectricalConductivity,
        SoilParameter::OrganicCarbon,
        SoilParameter::Nitrogen,
        SoilParameter::Phosphorus,
        SoilParameter::Potassium,
        SoilParameter::Sulfur,
        SoilParameter::Calcium,
        SoilParameter::Magnesium,
        SoilParameter::Temperature,
        SoilParameter::Rainfall,
        SoilParameter::Humidity,
        SoilParameter::SolarRadiation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SoilParameter::SoilMoisture => "Soil Moisture",
            SoilParameter::BulkDensity => "Bulk Density",
            SoilParameter::Porosity => "Porosity",
            SoilParameter::WaterHoldingCapacity => "Water Holding Capacity",
            SoilParameter::PhLevel => "pH Level",
            SoilParameter::ElectricalConductivity => "Electrical Conductivity",
            SoilParameter::OrganicCarbon => "Organic Carbon",
            SoilParameter::Nitrogen => "Nitrogen",
            SoilParameter::Phosphorus => "Phosphorus",
            SoilParameter::Potassium => "Potassium",
            SoilParameter::Sulfur => "Sulfur",
            SoilParameter::Calcium => "Calcium",
            SoilParameter::Magnesium => "Magnesium",
            SoilParameter::Temperature => "Temperature",
            SoilParameter::Rainfall => "Rainfall",
            SoilParameter::Humidity => "Humidity",
            SoilParameter::SolarRadiation => "Solar Radiation",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SoilParameter::SoilMoisture
            | SoilParameter::Porosity
            | SoilParameter::WaterHoldingCapacity
            | SoilParameter::OrganicCarbon
            | SoilParameter::Humidity => "%",
            SoilParameter::BulkDensity => "g/cm³",
            SoilParameter::PhLevel => "",
            SoilParameter::ElectricalConductivity => "dS/m",
            SoilParameter::Nitrogen
            | SoilParameter::Phosphorus
            | SoilParameter::Potassium
            | SoilParameter::Sulfur
            | SoilParameter::Calcium
            | SoilParameter::Magnesium => "mg/kg",
            SoilParameter::Temperature => "°C",
            SoilParameter::Rainfall => "mm",
            SoilParameter::SolarRadiation => "W/m²",
        }
    }

    pub fn bands(&self) -> &'static [StaticBand] {
        match self {
            SoilParameter::SoilMoisture => soil::SOIL_MOISTURE,
            SoilParameter::BulkDensity => soil::BULK_DENSITY,
            SoilParameter::Porosity => soil::POROSITY,
            SoilParameter::WaterHoldingCapacity => soil::WATER_HOLDING_CAPACITY,
            SoilParameter::PhLevel => soil::PH_LEVEL,
            SoilParameter::ElectricalConductivity => soil::ELECTRICAL_CONDUCTIVITY,
            SoilParameter::OrganicCarbon => soil::ORGANIC_CARBON,
            SoilParameter::Nitrogen => soil::NITROGEN,
            SoilParameter::Phosphorus => soil::PHOSPHORUS,
            SoilParameter::Potassium => soil::POTASSIUM,
            SoilParameter::Sulfur => soil::SULFUR,
            SoilParameter::Calcium => soil::CALCIUM,
            SoilParameter::Magnesium => soil::MAGNESIUM,
            SoilParameter::Temperature => soil::TEMPERATURE,
            SoilParameter::Rainfall => soil::RAINFALL,
            SoilParameter::Humidity => soil::HUMIDITY,
            SoilParameter::SolarRadiation => soil::SOLAR_RADIATION,
        }
    }

    /// `(min, max)` of the card's progress bar. Independent of the band
    /// table.
    pub fn progress_range(&self) -> (f64, f64) {
        use soil::progress;
        match self {
            SoilParameter::SoilMoisture => progress::SOIL_MOISTURE,
            SoilParameter::BulkDensity => progress::BULK_DENSITY,
            SoilParameter::Porosity => progress::POROSITY,
            SoilParameter::WaterHoldingCapacity => progress::WATER_HOLDING_CAPACITY,
            SoilParameter::PhLevel => progress::PH_LEVEL,
            SoilParameter::ElectricalConductivity => progress::ELECTRICAL_CONDUCTIVITY,
            SoilParameter::OrganicCarbon => progress::ORGANIC_CARBON,
            SoilParameter::Nitrogen => progress::NITROGEN,
            SoilParameter::Phosphorus => progress::PHOSPHORUS,
            SoilParameter::Potassium => progress::POTASSIUM,
            SoilParameter::Sulfur => progress::SULFUR,
            SoilParameter::Calcium => progress::CALCIUM,
            SoilParameter::Magnesium => progress::MAGNESIUM,
            SoilParameter::Temperature => progress::TEMPERATURE,
            SoilParameter::Rainfall => progress::RAINFALL,
            SoilParameter::Humidity => progress::HUMIDITY,
            SoilParameter::SolarRadiation => progress::SOLAR_RADIATION,
        }
    }

    /// Band table as owned values, for clients that render the legend
    pub fn range_bands(&self) -> Vec<RangeBand> {
        self.bands().iter().map(RangeBand::from).collect()
    }
}

impl SoilReadings {
    pub fn get(&self, parameter: SoilParameter) -> f64 {
        match parameter {
            SoilParameter::SoilMoisture => self.soil_moisture_percent,
            SoilParameter::BulkDensity => self.bulk_density_g_cm3,
            SoilParameter::Porosity => self.porosity_percent,
            SoilParameter::WaterHoldingCapacity => self.water_holding_capacity_percent,
            SoilParameter::PhLevel => self.ph_level,
            SoilParameter::ElectricalConductivity => self.electrical_conductivity_ds_m,
            SoilParameter::OrganicCarbon => self.organic_carbon_percent,
            SoilParameter::Nitrogen => self.nitrogen_mg_kg,
            SoilParameter::Phosphorus => self.phosphorus_mg_kg,
            SoilParameter::Potassium => self.potassium_mg_kg,
            SoilParameter::Sulfur => self.sulfur_mg_kg,
            SoilParameter::Calcium => self.calcium_mg_kg,
            SoilParameter::Magnesium => self.magnesium_mg_kg,
            SoilParameter::Temperature => self.temperature_c,
            SoilParameter::Rainfall => self.rainfall_mm,
            SoilParameter::Humidity => self.humidity_percent,
            SoilParameter::SolarRadiation => self.solar_radiation_w_m2,
        }
    }
}

/// One dashboard card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterStatus {
    pub parameter: SoilParameter,
    pub title: String,
    pub value: f64,
    pub unit: String,
    pub status: String,
    pub progress_percent: f64,
}

/// Whole soil dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilDashboard {
    pub soil_texture: String,
    pub soil_texture_description: String,
    pub parameters: Vec<ParameterStatus>,
}

/// Classify one reading and place it on the card's progress bar
pub fn evaluate_parameter(parameter: SoilParameter, value: f64) -> ParameterStatus {
    let bands = parameter.bands();
    let (lo, hi) = parameter.progress_range();
    let progress_percent = progress_percentage(value, lo, hi);

    ParameterStatus {
        parameter,
        title: parameter.title().to_string(),
        value,
        unit: parameter.unit().to_string(),
        status: classify(value, bands).to_string(),
        progress_percent,
    }
}

/// Evaluate every soil parameter in dashboard order
pub fn evaluate_soil(readings: &SoilReadings) -> AgroResult<SoilDashboard> {
    let mut parameters = Vec::with_capacity(SoilParameter::ALL.len());
    for parameter in SoilParameter::ALL {
        let value = validate_finite(parameter.title(), readings.get(parameter))?;
        parameters.push(evaluate_parameter(parameter, value));
    }

    Ok(SoilDashboard {
        soil_texture: SOIL_TEXTURE.to_string(),
        soil_texture_description: SOIL_TEXTURE_DESCRIPTION.to_string(),
        parameters,
    })
}
