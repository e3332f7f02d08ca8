//! Ideal growing conditions lookup

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::ideal::{self, IdealRow};
use crate::error::{AgroError, AgroResult};

/// Reference categories, in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum CropCategory {
    #[default]
    Fruits,
    Crops,
    Vegetables,
}

impl CropCategory {
    pub const ALL: [CropCategory; 3] = [
        CropCategory::Fruits,
        CropCategory::Crops,
        CropCategory::Vegetables,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CropCategory::Fruits => "Fruits",
            CropCategory::Crops => "Crops",
            CropCategory::Vegetables => "Vegetables",
        }
    }

    fn rows(&self) -> &'static [IdealRow] {
        match self {
            CropCategory::Fruits => ideal::FRUITS,
            CropCategory::Crops => ideal::FIELD_CROPS,
            CropCategory::Vegetables => ideal::VEGETABLES,
        }
    }
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CropCategory {
    type Err = AgroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropCategory::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AgroError::invalid_input("category", format!("unknown category '{}'", s))
            })
    }
}

/// Target soil and climate values for a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IdealConditions {
    pub nitrogen_ppm: f64,
    pub phosphorus_ppm: f64,
    pub potassium_ppm: f64,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub ph: f64,
    pub rainfall_mm: f64,
}

/// One crop's reference card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdealCropProfile {
    pub category: CropCategory,
    pub crop: String,
    pub ideal_conditions: IdealConditions,
    pub best_practices: Vec<String>,
}

impl IdealCropProfile {
    fn from_row(category: CropCategory, row: &IdealRow) -> Self {
        Self {
            category,
            crop: row.crop.to_string(),
            ideal_conditions: IdealConditions {
                nitrogen_ppm: row.nitrogen,
                phosphorus_ppm: row.phosphorus,
                potassium_ppm: row.potassium,
                temperature_c: row.temperature_c,
                humidity_percent: row.humidity_percent,
                ph: row.ph,
                rainfall_mm: row.rainfall_mm,
            },
            best_practices: row.best_practices.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Crop names in a category, in display order
pub fn ideal_crops(category: CropCategory) -> impl Iterator<Item = &'static str> {
    category.rows().iter().map(|row| row.crop)
}

/// Look up a crop by exact name within a category. Without a crop name the
/// category's first crop is returned.
pub fn ideal_conditions(
    category: CropCategory,
    crop: Option<&str>,
) -> AgroResult<IdealCropProfile> {
    let rows = category.rows();
    let row = match crop.map(str::trim).filter(|c| !c.is_empty()) {
        Some(name) => rows.iter().find(|row| row.crop == name),
        None => rows.first(),
    };

    row.map(|row| IdealCropProfile::from_row(category, row))
        .ok_or_else(|| AgroError::ProfileNotFound(crop.unwrap_or(category.name()).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sizes() {
        assert_eq!(ideal_crops(CropCategory::Fruits).count(), 15);
        assert_eq!(ideal_crops(CropCategory::Crops).count(), 15);
        assert_eq!(ideal_crops(CropCategory::Vegetables).count(), 10);
    }

    #[test]
    fn test_lookup_exact_crop() {
        let profile = ideal_conditions(CropCategory::Crops, Some("Rice")).unwrap();
        assert_eq!(profile.crop, "Rice");
        assert_eq!(profile.ideal_conditions.nitrogen_ppm, 80.5);
        assert_eq!(profile.ideal_conditions.humidity_percent, 82.5);
        assert_eq!(profile.ideal_conditions.rainfall_mm, 230.2);
        assert_eq!(profile.best_practices.len(), 3);

        let profile = ideal_conditions(CropCategory::Crops, Some("Chickpea (Gram)")).unwrap();
        assert_eq!(profile.ideal_conditions.ph, 7.2);
    }

    #[test]
    fn test_missing_crop_defaults_to_first() {
        let profile = ideal_conditions(CropCategory::Fruits, None).unwrap();
        assert_eq!(profile.crop, "Mango");
        let profile = ideal_conditions(CropCategory::Vegetables, Some("  ")).unwrap();
        assert_eq!(profile.crop, "Potato");
    }

    #[test]
    fn test_lookup_is_exact_and_per_category() {
        // Rice is a field crop, not a fruit
        let err = ideal_conditions(CropCategory::Fruits, Some("Rice")).unwrap_err();
        assert_eq!(err, AgroError::ProfileNotFound("Rice".to_string()));
        assert!(ideal_conditions(CropCategory::Crops, Some("rice")).is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("vegetables".parse::<CropCategory>(), Ok(CropCategory::Vegetables));
        assert_eq!(" Fruits ".parse::<CropCategory>(), Ok(CropCategory::Fruits));
        let err = "Herbs".parse::<CropCategory>().unwrap_err();
        assert!(matches!(err, AgroError::InvalidInput { ref field, .. } if field == "category"));
    }
}
