//! Daily irrigation depth by crop and growth stage

/// One row of the irrigation reference table, ranges written as `"X-Y mm"`
#[derive(Debug, Clone, Copy)]
pub struct CropIrrigationRow {
    pub crop: &'static str,
    pub seeding: &'static str,
    pub vegetative: &'static str,
    pub flowering_fruiting: &'static str,
    pub maturity: &'static str,
}

const fn row(
    crop: &'static str,
    seeding: &'static str,
    vegetative: &'static str,
    flowering_fruiting: &'static str,
    maturity: &'static str,
) -> CropIrrigationRow {
    CropIrrigationRow {
        crop,
        seeding,
        vegetative,
        flowering_fruiting,
        maturity,
    }
}

pub const IRRIGATION_TABLE: &[CropIrrigationRow] = &[
    row("Rice", "6-10 mm", "10-15 mm", "15-20 mm", "5-10 mm"),
    row("Wheat", "2-5 mm", "5-7 mm", "7-10 mm", "3-5 mm"),
    row("Maize", "3-6 mm", "6-8 mm", "8-12 mm", "5-7 mm"),
    row("Sugarcane", "5-7 mm", "7-10 mm", "10-15 mm", "7-10 mm"),
    row("Cotton", "3-5 mm", "5-8 mm", "8-12 mm", "5-7 mm"),
    row("Chickpea (Gram)", "2-4 mm", "4-6 mm", "6-8 mm", "3-5 mm"),
    row("Pigeon Pea (Arhar/Tur)", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Groundnut", "3-5 mm", "5-8 mm", "8-10 mm", "4-6 mm"),
    row("Mustard", "3-5 mm", "5-7 mm", "7-10 mm", "4-6 mm"),
    row("Barley", "2-5 mm", "5-7 mm", "7-10 mm", "3-5 mm"),
    row("Jowar (Sorghum)", "3-6 mm", "6-8 mm", "8-12 mm", "5-7 mm"),
    row("Bajra (Pearl Millet)", "3-6 mm", "6-8 mm", "8-12 mm", "5-7 mm"),
    row("Sunflower", "4-6 mm", "6-8 mm", "8-12 mm", "5-7 mm"),
    row("Soybean", "3-5 mm", "5-8 mm", "8-10 mm", "4-6 mm"),
    row("Sesame", "3-5 mm", "5-7 mm", "7-10 mm", "4-6 mm"),
    row("Potato", "3-5 mm", "5-8 mm", "8-12 mm", "5-7 mm"),
    row("Tomato", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Onion", "2-5 mm", "5-7 mm", "7-10 mm", "3-5 mm"),
    row("Brinjal (Eggplant)", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Cauliflower", "3-5 mm", "5-7 mm", "7-10 mm", "4-6 mm"),
    row("Cabbage", "3-5 mm", "5-7 mm", "7-10 mm", "4-6 mm"),
    row("Carrot", "2-5 mm", "5-7 mm", "7-10 mm", "3-5 mm"),
    row("Green Peas", "2-5 mm", "5-7 mm", "7-10 mm", "3-5 mm"),
    row("Lady Finger (Okra)", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Spinach", "2-5 mm", "5-7 mm", "7-10 mm", "3-5 mm"),
    row("Radish", "2-5 mm", "5-7 mm", "7-10 mm", "3-5 mm"),
    row("Pumpkin", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Bitter Gourd", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Bottle Gourd", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Cucumber", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Mango", "5-7 mm", "7-10 mm", "10-15 mm", "7-10 mm"),
    row("Banana", "7-10 mm", "10-15 mm", "15-20 mm", "10-15 mm"),
    row("Apple", "3-5 mm", "5-7 mm", "7-10 mm", "4-6 mm"),
    row("Grapes", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Orange", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Guava", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Pomegranate", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Papaya", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Pineapple", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Watermelon", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Muskmelon", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Lemon", "3-5 mm", "5-8 mm", "8-12 mm", "4-6 mm"),
    row("Litchi", "7-10 mm", "10-15 mm", "8-12 mm", "10-15 mm"),
];
