//! Type Conversions for RunError
//!
//! From implementations for the error types this crate touches.

use super::types::RunError;

impl From<serde_json::Error> for RunError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for RunError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::InvalidMetadata(err.to_string())
    }
}
