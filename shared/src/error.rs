//! Error type for the agronomy engines

use thiserror::Error;

/// Failures reported by the calculation engines.
///
/// All variants are recoverable: the caller is expected to correct the input
/// and call again. Retrying with the same input yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgroError {
    /// Malformed or non-finite numeric input, or a missing required value
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Field area is not a finite number greater than zero
    #[error("Field area must be a positive number of hectares, got {0}")]
    InvalidArea(f64),

    /// Growth stage is absent from a crop's irrigation profile
    #[error("Growth stage '{stage}' not found for crop '{crop}'")]
    StageNotFound { crop: String, stage: String },

    /// Lookup miss against a static reference table
    #[error("No profile found for crop '{0}'")]
    ProfileNotFound(String),

    /// Days to harvest cannot be projected because no heat accumulates per day
    #[error("Cannot estimate days to harvest: daily GDD is zero")]
    CannotEstimate,
}

impl AgroError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        AgroError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Machine-readable error code, stable across releases
    pub fn code(&self) -> &'static str {
        match self {
            AgroError::InvalidInput { .. } => "INVALID_INPUT",
            AgroError::InvalidArea(_) => "INVALID_AREA",
            AgroError::StageNotFound { .. } => "STAGE_NOT_FOUND",
            AgroError::ProfileNotFound(_) => "PROFILE_NOT_FOUND",
            AgroError::CannotEstimate => "CANNOT_ESTIMATE",
        }
    }
}

/// Result alias for engine calls
pub type AgroResult<T> = Result<T, AgroError>;
