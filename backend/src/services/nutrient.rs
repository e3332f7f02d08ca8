//! Fertilizer recommendation service

use std::collections::HashMap;

use shared::{fertilizer_report, FertilizerReport, NutrientLevels};

use crate::error::AppResult;

/// Fertilizer recommendation service
#[derive(Clone, Default)]
pub struct NutrientService;

impl NutrientService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate soil test readings keyed by nutrient name
    /// (`Nitrogen_mg_kg`, `nitrogen`, ...)
    pub fn evaluate(&self, readings: &HashMap<String, f64>) -> AppResult<FertilizerReport> {
        let levels = NutrientLevels::from_map(readings)?;
        let report = fertilizer_report(&levels)?;

        tracing::debug!(
            "Fertilizer evaluation produced {} recommendation(s)",
            report.recommendations.len()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use shared::{AgroError, NutrientStatus};

    fn readings(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_evaluate_all_optimal() {
        let report = NutrientService::new()
            .evaluate(&readings(&[
                ("Nitrogen_mg_kg", 100.0),
                ("Phosphorus_mg_kg", 80.0),
                ("Potassium_mg_kg", 300.0),
                ("Sulfur_mg_kg", 45.0),
                ("Calcium_mg_kg", 2500.0),
                ("Magnesium_mg_kg", 300.0),
            ]))
            .unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].status, NutrientStatus::Optimal);
    }

    #[test]
    fn test_evaluate_missing_nutrient() {
        let err = NutrientService::new()
            .evaluate(&readings(&[("nitrogen", 100.0)]))
            .unwrap_err();
        assert!(matches!(err, AppError::Agro(AgroError::InvalidInput { .. })));
    }
}
