//! Fertilizer thresholds and remediation text, in mg/kg

/// Per-nutrient thresholds. A value below `deficient_below` is deficient,
/// below `low_below` is low, below `moderate_below` is moderate and anything
/// else is optimal.
#[derive(Debug, Clone, Copy)]
pub struct NutrientThresholds {
    pub deficient_below: f64,
    pub low_below: f64,
    pub moderate_below: f64,
    pub deficient_advice: &'static str,
    pub low_advice: &'static str,
    pub moderate_advice: &'static str,
}

pub const NITROGEN: NutrientThresholds = NutrientThresholds {
    deficient_below: 20.0,
    low_below: 40.0,
    moderate_below: 80.0,
    deficient_advice: "Severely deficient in Nitrogen. Apply Urea or Ammonium Nitrate.",
    low_advice: "Low Nitrogen levels. Use NPK 20-20-20 or organic manure.",
    moderate_advice: "Moderate Nitrogen levels. Supplement with compost if needed.",
};

pub const PHOSPHORUS: NutrientThresholds = NutrientThresholds {
    deficient_below: 10.0,
    low_below: 25.0,
    moderate_below: 50.0,
    deficient_advice: "Severely deficient in Phosphorus. Use Single Super Phosphate (SSP) or DAP.",
    low_advice: "Low Phosphorus levels. Apply Rock Phosphate or bone meal.",
    moderate_advice: "Moderate Phosphorus levels. Consider balanced NPK if needed.",
};

pub const POTASSIUM: NutrientThresholds = NutrientThresholds {
    deficient_below: 30.0,
    low_below: 60.0,
    moderate_below: 120.0,
    deficient_advice: "Severely deficient in Potassium. Use Muriate of Potash (MOP) or SOP.",
    low_advice: "Low Potassium levels. Apply potassium sulfate or compost.",
    moderate_advice: "Moderate Potassium levels. Use banana peel compost or wood ash.",
};

pub const SULFUR: NutrientThresholds = NutrientThresholds {
    deficient_below: 10.0,
    low_below: 20.0,
    moderate_below: 30.0,
    deficient_advice: "Severely deficient in Sulfur. Apply Ammonium Sulfate or Gypsum.",
    low_advice: "Low Sulfur levels. Use elemental sulfur if necessary.",
    moderate_advice: "Moderate Sulfur levels. Monitor levels for crop-specific needs.",
};

pub const CALCIUM: NutrientThresholds = NutrientThresholds {
    deficient_below: 500.0,
    low_below: 1000.0,
    moderate_below: 2000.0,
    deficient_advice: "Severely deficient in Calcium. Apply Lime or Gypsum.",
    low_advice: "Low Calcium levels. Use calcium nitrate if needed.",
    moderate_advice: "Moderate Calcium levels. Maintain soil pH balance.",
};

pub const MAGNESIUM: NutrientThresholds = NutrientThresholds {
    deficient_below: 50.0,
    low_below: 100.0,
    moderate_below: 200.0,
    deficient_advice: "Severely deficient in Magnesium. Apply Magnesium Sulfate (Epsom salt).",
    low_advice: "Low Magnesium levels. Use Dolomite Lime or Magnesium Oxide.",
    moderate_advice: "Moderate Magnesium levels. Supplement with organic amendments if necessary.",
};

/// Message emitted in place of per-nutrient advice when nothing is lacking
pub const ALL_OPTIMAL_MESSAGE: &str = "Soil nutrient levels are optimal.";
