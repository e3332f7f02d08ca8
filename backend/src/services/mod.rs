//! Business logic services for the KhetSeva API

pub mod harvest;
pub mod history;
pub mod ideal;
pub mod irrigation;
pub mod nutrient;
pub mod soil;
pub mod weather;

pub use harvest::HarvestService;
pub use history::{HistoryService, HistoryStore, PgHistoryStore};
pub use ideal::IdealConditionsService;
pub use irrigation::IrrigationService;
pub use nutrient::NutrientService;
pub use soil::SoilService;
pub use weather::WeatherService;
