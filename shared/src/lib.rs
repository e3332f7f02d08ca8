//! Shared types and calculation engines for the KhetSeva agronomy tools
//!
//! Everything here is pure and synchronous so it can run in the backend and
//! in the browser (via WASM) with identical results.

pub mod data;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
