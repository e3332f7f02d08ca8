//! Ideal growing conditions reference service

use serde::{Deserialize, Serialize};
use shared::{ideal_conditions, ideal_crops, CropCategory, IdealCropProfile};

use crate::error::AppResult;

/// Ideal conditions lookup service
#[derive(Clone, Default)]
pub struct IdealConditionsService;

/// Query for one reference card. Defaults to the first fruit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdealConditionsQuery {
    pub category: Option<String>,
    pub crop: Option<String>,
}

/// Crops available in one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCrops {
    pub category: CropCategory,
    pub crops: Vec<String>,
}

impl IdealConditionsService {
    pub fn new() -> Self {
        Self
    }

    pub fn lookup(&self, query: &IdealConditionsQuery) -> AppResult<IdealCropProfile> {
        let category = match query.category.as_deref() {
            Some(name) => name.parse()?,
            None => CropCategory::default(),
        };
        let profile = ideal_conditions(category, query.crop.as_deref())?;

        tracing::debug!("Ideal conditions for {} / {}", category, profile.crop);
        Ok(profile)
    }

    pub fn catalogue(&self) -> Vec<CategoryCrops> {
        CropCategory::ALL
            .into_iter()
            .map(|category| CategoryCrops {
                category,
                crops: ideal_crops(category).map(str::to_string).collect(),
            })
            .collect()
    }
}
