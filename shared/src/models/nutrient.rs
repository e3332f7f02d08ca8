//! Soil nutrient status and fertilizer recommendation models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::nutrients::{self, NutrientThresholds, ALL_OPTIMAL_MESSAGE};
use crate::error::{AgroError, AgroResult};
use crate::validation::validate_finite;

/// Nutrients tracked by the fertilizer tool
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
    Sulfur,
    Calcium,
    Magnesium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Nitrogen,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Sulfur,
        Nutrient::Calcium,
        Nutrient::Magnesium,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
            Nutrient::Sulfur => "Sulfur",
            Nutrient::Calcium => "Calcium",
            Nutrient::Magnesium => "Magnesium",
        }
    }

    pub fn thresholds(&self) -> &'static NutrientThresholds {
        match self {
            Nutrient::Nitrogen => &nutrients::NITROGEN,
            Nutrient::Phosphorus => &nutrients::PHOSPHORUS,
            Nutrient::Potassium => &nutrients::POTASSIUM,
            Nutrient::Sulfur => &nutrients::SULFUR,
            Nutrient::Calcium => &nutrients::CALCIUM,
            Nutrient::Magnesium => &nutrients::MAGNESIUM,
        }
    }

    /// Matches `Nitrogen`, `nitrogen` and `Nitrogen_mg_kg`
    fn matches_key(&self, key: &str) -> bool {
        let key = key.trim();
        let key = key
            .strip_suffix("_mg_kg")
            .or_else(|| key.strip_suffix("_MG_KG"))
            .unwrap_or(key);
        key.eq_ignore_ascii_case(self.name())
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Severity bands, ordered from worst to best
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Deficient,
    Low,
    Moderate,
    Optimal,
}

impl std::fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientStatus::Deficient => write!(f, "Deficient"),
            NutrientStatus::Low => write!(f, "Low"),
            NutrientStatus::Moderate => write!(f, "Moderate"),
            NutrientStatus::Optimal => write!(f, "Optimal"),
        }
    }
}

/// Measured nutrient concentrations in mg/kg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientLevels {
    #[serde(rename = "Nitrogen_mg_kg", alias = "nitrogen", alias = "Nitrogen")]
    pub nitrogen: f64,
    #[serde(rename = "Phosphorus_mg_kg", alias = "phosphorus", alias = "Phosphorus")]
    pub phosphorus: f64,
    #[serde(rename = "Potassium_mg_kg", alias = "potassium", alias = "Potassium")]
    pub potassium: f64,
    #[serde(rename = "Sulfur_mg_kg", alias = "sulfur", alias = "Sulfur")]
    pub sulfur: f64,
    #[serde(rename = "Calcium_mg_kg", alias = "calcium", alias = "Calcium")]
    pub calcium: f64,
    #[serde(rename = "Magnesium_mg_kg", alias = "magnesium", alias = "Magnesium")]
    pub magnesium: f64,
}

impl NutrientLevels {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
            Nutrient::Sulfur => self.sulfur,
            Nutrient::Calcium => self.calcium,
            Nutrient::Magnesium => self.magnesium,
        }
    }

    /// Build levels from a name → value mapping. All six nutrients are
    /// required; keys match case-insensitively with an optional `_mg_kg`
    /// suffix. Two keys naming the same nutrient are rejected.
    pub fn from_map(readings: &HashMap<String, f64>) -> AgroResult<Self> {
        let lookup = |nutrient: Nutrient| -> AgroResult<f64> {
            let mut matches = readings
                .iter()
                .filter(|(key, _)| nutrient.matches_key(key))
                .map(|(_, value)| *value);
            let value = matches.next().ok_or_else(|| {
                AgroError::invalid_input(nutrient.name(), "missing nutrient concentration")
            })?;
            if matches.next().is_some() {
                return Err(AgroError::invalid_input(
                    nutrient.name(),
                    "nutrient concentration given more than once",
                ));
            }
            validate_finite(nutrient.name(), value)
        };

        Ok(Self {
            nitrogen: lookup(Nutrient::Nitrogen)?,
            phosphorus: lookup(Nutrient::Phosphorus)?,
            potassium: lookup(Nutrient::Potassium)?,
            sulfur: lookup(Nutrient::Sulfur)?,
            calcium: lookup(Nutrient::Calcium)?,
            magnesium: lookup(Nutrient::Magnesium)?,
        })
    }

    fn validate(&self) -> AgroResult<()> {
        for nutrient in Nutrient::ALL {
            validate_finite(nutrient.name(), self.get(nutrient))?;
        }
        Ok(())
    }
}

/// Outcome for one nutrient, or the single synthetic all-optimal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientStatusResult {
    pub nutrient_name: String,
    /// Absent on the synthetic all-optimal entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_value: Option<f64>,
    pub status: NutrientStatus,
    pub recommendation_text: Option<String>,
}

/// Status of one nutrient without recommendation text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientAssessment {
    pub nutrient: Nutrient,
    pub measured_value: f64,
    pub status: NutrientStatus,
}

/// Full fertilizer tool output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FertilizerReport {
    pub nutrient_status: Vec<NutrientAssessment>,
    pub recommendations: Vec<String>,
    pub results: Vec<NutrientStatusResult>,
}

/// Classify a concentration against a nutrient's thresholds.
///
/// Boundaries are strict: a value equal to a threshold falls into the next
/// better band.
pub fn classify_nutrient(nutrient: Nutrient, value: f64) -> NutrientStatus {
    let t = nutrient.thresholds();
    if value < t.deficient_below {
        NutrientStatus::Deficient
    } else if value < t.low_below {
        NutrientStatus::Low
    } else if value < t.moderate_below {
        NutrientStatus::Moderate
    } else {
        NutrientStatus::Optimal
    }
}

/// Remediation text for a non-optimal band
pub fn recommendation_for(nutrient: Nutrient, status: NutrientStatus) -> Option<&'static str> {
    let t = nutrient.thresholds();
    match status {
        NutrientStatus::Deficient => Some(t.deficient_advice),
        NutrientStatus::Low => Some(t.low_advice),
        NutrientStatus::Moderate => Some(t.moderate_advice),
        NutrientStatus::Optimal => None,
    }
}

/// Status of all six nutrients in table order
pub fn assess_nutrients(levels: &NutrientLevels) -> AgroResult<Vec<NutrientAssessment>> {
    levels.validate()?;
    Ok(Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let measured_value = levels.get(nutrient);
            NutrientAssessment {
                nutrient,
                measured_value,
                status: classify_nutrient(nutrient, measured_value),
            }
        })
        .collect())
}

/// Evaluate nutrient levels into recommendations.
///
/// Returns one entry per non-optimal nutrient. When every nutrient is
/// optimal the result collapses to exactly one synthetic optimal entry.
pub fn evaluate_nutrients(levels: &NutrientLevels) -> AgroResult<Vec<NutrientStatusResult>> {
    let results: Vec<NutrientStatusResult> = assess_nutrients(levels)?
        .into_iter()
        .filter_map(|assessment| {
            recommendation_for(assessment.nutrient, assessment.status).map(|text| {
                NutrientStatusResult {
                    nutrient_name: assessment.nutrient.name().to_string(),
                    measured_value: Some(assessment.measured_value),
                    status: assessment.status,
                    recommendation_text: Some(text.to_string()),
                }
            })
        })
        .collect();

    if results.is_empty() {
        return Ok(vec![NutrientStatusResult {
            nutrient_name: "All nutrients".to_string(),
            measured_value: None,
            status: NutrientStatus::Optimal,
            recommendation_text: Some(ALL_OPTIMAL_MESSAGE.to_string()),
        }]);
    }

    Ok(results)
}

/// Status table plus recommendations, as shown by the fertilizer tool
pub fn fertilizer_report(levels: &NutrientLevels) -> AgroResult<FertilizerReport> {
    let nutrient_status = assess_nutrients(levels)?;
    let results = evaluate_nutrients(levels)?;
    let recommendations = results
        .iter()
        .filter_map(|r| r.recommendation_text.clone())
        .collect();

    Ok(FertilizerReport {
        nutrient_status,
        recommendations,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimal_levels() -> NutrientLevels {
        NutrientLevels {
            nitrogen: 100.0,
            phosphorus: 80.0,
            potassium: 300.0,
            sulfur: 45.0,
            calcium: 2500.0,
            magnesium: 300.0,
        }
    }

    #[test]
    fn test_classify_nutrient_bands() {
        assert_eq!(classify_nutrient(Nutrient::Nitrogen, 19.9), NutrientStatus::Deficient);
        assert_eq!(classify_nutrient(Nutrient::Nitrogen, 20.0), NutrientStatus::Low);
        assert_eq!(classify_nutrient(Nutrient::Nitrogen, 40.0), NutrientStatus::Moderate);
        assert_eq!(classify_nutrient(Nutrient::Nitrogen, 80.0), NutrientStatus::Optimal);
        assert_eq!(classify_nutrient(Nutrient::Calcium, 999.0), NutrientStatus::Low);
        assert_eq!(classify_nutrient(Nutrient::Magnesium, -5.0), NutrientStatus::Deficient);
    }

    #[test]
    fn test_thresholds_are_per_nutrient() {
        // 45 mg/kg means different things for different nutrients
        assert_eq!(classify_nutrient(Nutrient::Nitrogen, 45.0), NutrientStatus::Moderate);
        assert_eq!(classify_nutrient(Nutrient::Phosphorus, 45.0), NutrientStatus::Moderate);
        assert_eq!(classify_nutrient(Nutrient::Potassium, 45.0), NutrientStatus::Low);
        assert_eq!(classify_nutrient(Nutrient::Sulfur, 45.0), NutrientStatus::Optimal);
        assert_eq!(classify_nutrient(Nutrient::Calcium, 45.0), NutrientStatus::Deficient);
    }

    #[test]
    fn test_all_optimal_collapses_to_one() {
        let results = evaluate_nutrients(&optimal_levels()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, NutrientStatus::Optimal);
        assert_eq!(
            results[0].recommendation_text.as_deref(),
            Some("Soil nutrient levels are optimal.")
        );
    }

    #[test]
    fn test_nitrogen_deficient_only() {
        let levels = NutrientLevels {
            nitrogen: 15.0,
            phosphorus: 80.0,
            potassium: 300.0,
            sulfur: 30.0,
            calcium: 2500.0,
            magnesium: 300.0,
        };
        let results = evaluate_nutrients(&levels).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].nutrient_name, "Nitrogen");
        assert_eq!(results[0].status, NutrientStatus::Deficient);
        assert_eq!(results[0].measured_value, Some(15.0));
        let text = results[0].recommendation_text.as_deref().unwrap();
        assert!(text.contains("Urea"));
        assert!(text.contains("Ammonium Nitrate"));
    }

    #[test]
    fn test_results_follow_table_order() {
        let levels = NutrientLevels {
            nitrogen: 50.0,
            phosphorus: 5.0,
            potassium: 300.0,
            sulfur: 15.0,
            calcium: 2500.0,
            magnesium: 60.0,
        };
        let results = evaluate_nutrients(&levels).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.nutrient_name.as_str()).collect();
        assert_eq!(names, vec!["Nitrogen", "Phosphorus", "Sulfur", "Magnesium"]);
        let statuses: Vec<NutrientStatus> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                NutrientStatus::Moderate,
                NutrientStatus::Deficient,
                NutrientStatus::Low,
                NutrientStatus::Low,
            ]
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut levels = optimal_levels();
        levels.potassium = f64::NAN;
        let err = evaluate_nutrients(&levels).unwrap_err();
        assert!(matches!(err, AgroError::InvalidInput { ref field, .. } if field == "Potassium"));
    }

    #[test]
    fn test_from_map_accepts_key_variants() {
        let mut readings = HashMap::new();
        readings.insert("Nitrogen_mg_kg".to_string(), 10.0);
        readings.insert("phosphorus".to_string(), 20.0);
        readings.insert("POTASSIUM".to_string(), 30.0);
        readings.insert("Sulfur".to_string(), 40.0);
        readings.insert("calcium_mg_kg".to_string(), 50.0);
        readings.insert("Magnesium".to_string(), 60.0);

        let levels = NutrientLevels::from_map(&readings).unwrap();
        assert_eq!(levels.nitrogen, 10.0);
        assert_eq!(levels.calcium, 50.0);
        assert_eq!(levels.magnesium, 60.0);
    }

    #[test]
    fn test_from_map_missing_key() {
        let mut readings = HashMap::new();
        readings.insert("Nitrogen".to_string(), 10.0);
        let err = NutrientLevels::from_map(&readings).unwrap_err();
        assert!(matches!(err, AgroError::InvalidInput { ref field, .. } if field == "Phosphorus"));
    }

    #[test]
    fn test_from_map_rejects_duplicate_nutrient_keys() {
        let mut readings = HashMap::new();
        readings.insert("Nitrogen".to_string(), 10.0);
        readings.insert("nitrogen".to_string(), 100.0);
        readings.insert("Phosphorus".to_string(), 80.0);
        readings.insert("Potassium".to_string(), 300.0);
        readings.insert("Sulfur".to_string(), 45.0);
        readings.insert("Calcium".to_string(), 2500.0);
        readings.insert("Magnesium".to_string(), 300.0);

        for _ in 0..20 {
            let err = NutrientLevels::from_map(&readings).unwrap_err();
            assert!(
                matches!(err, AgroError::InvalidInput { ref field, .. } if field == "Nitrogen")
            );
        }

        readings.remove("nitrogen");
        readings.insert("Nitrogen_mg_kg".to_string(), 100.0);
        assert!(NutrientLevels::from_map(&readings).is_err());
    }

    #[test]
    fn test_fertilizer_report_shape() {
        let mut levels = optimal_levels();
        levels.calcium = 1200.0;
        let report = fertilizer_report(&levels).unwrap();
        assert_eq!(report.nutrient_status.len(), 6);
        assert_eq!(report.nutrient_status[4].nutrient, Nutrient::Calcium);
        assert_eq!(report.nutrient_status[4].status, NutrientStatus::Moderate);
        assert_eq!(
            report.recommendations,
            vec!["Moderate Calcium levels. Maintain soil pH balance.".to_string()]
        );
    }

    #[test]
    fn test_levels_deserialize_from_form_keys() {
        let json = r#"{
            "Nitrogen_mg_kg": 15, "Phosphorus_mg_kg": 80, "Potassium_mg_kg": 300,
            "Sulfur_mg_kg": 30, "Calcium_mg_kg": 2500, "Magnesium_mg_kg": 300
        }"#;
        let levels: NutrientLevels = serde_json::from_str(json).unwrap();
        assert_eq!(levels.nitrogen, 15.0);
        assert_eq!(levels.sulfur, 30.0);
    }
}
