//! Domain models for the KhetSeva agronomy tools

mod harvest;
mod history;
mod ideal;
mod irrigation;
mod nutrient;
mod soil;
mod threshold;
mod weather;

pub use harvest::*;
pub use history::*;
pub use ideal::*;
pub use irrigation::*;
pub use nutrient::*;
pub use soil::*;
pub use threshold::*;
pub use weather::*;
