//! Error taxonomy for the projection and simulation engines

use thiserror::Error;

/// Errors surfaced by the model
///
/// The computation itself is total over valid input, so almost every
/// failure is an [`ModelError::InvalidParameter`] raised before any work
/// starts. The remaining variants wrap loader and export I/O.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("failed to parse assumptions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write statement: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ModelError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// True for the input-rejection case (as opposed to I/O failures)
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
