//! HTTP handlers for the KhetSeva API

pub mod classify;
pub mod fertilizer;
pub mod harvest;
pub mod health;
pub mod history;
pub mod ideal;
pub mod irrigation;
pub mod soil;
pub mod weather;

pub use classify::*;
pub use fertilizer::*;
pub use harvest::*;
pub use health::*;
pub use history::*;
pub use ideal::*;
pub use irrigation::*;
pub use soil::*;
pub use weather::*;
