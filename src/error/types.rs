//! Core error type.

use thiserror::Error;

/// Errors raised while constructing or (de)serializing run requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunError {
    /// A field the API requires was never set on the builder.
    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    /// A numeric parameter fell outside its documented bounds.
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    OutOfRange {
        parameter: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Metadata exceeded the documented entry count or key/value lengths.
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl RunError {
    pub(crate) fn out_of_range(parameter: &'static str, min: f64, max: f64, value: f64) -> Self {
        Self::OutOfRange {
            parameter,
            min,
            max,
            value,
        }
    }

    /// Check if this error reports a missing required field
    pub const fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingRequiredField(_))
    }

    /// Check if this error reports an out-of-range parameter
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Result type for run-spec operations
pub type Result<T> = std::result::Result<T, RunError>;
