//! Create-run request body.

use super::builder::RunRequestBuilder;
use crate::error::RunError;
use crate::types::{AssistantId, AssistantTool, ModelId, SamplingTemperature, TruncationStrategy};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// Maximum number of metadata entries the API accepts
pub const METADATA_MAX_ENTRIES: usize = 16;
/// Maximum metadata key length, in characters
pub const METADATA_MAX_KEY_CHARS: usize = 64;
/// Maximum metadata value length, in characters
pub const METADATA_MAX_VALUE_CHARS: usize = 512;

/// Request to start a run of an assistant on a thread.
///
/// Unset optional fields are left out of the JSON body entirely; `stream` is
/// always sent. Build one with [`RunRequest::builder`] or [`run_request`](super::run_request).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RunRequest {
    /// The assistant that executes this run
    pub assistant_id: AssistantId,

    /// Overrides the model associated with the assistant for this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelId>,

    /// Overrides the assistant's default system message for this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    /// Appended to the instructions for this run without replacing them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_instructions: Option<String>,

    /// Overrides the tools the assistant can use for this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<AssistantTool>>,

    /// Up to 16 key-value pairs attached to the run.
    ///
    /// Keys can be at most 64 characters and values at most 512 characters.
    /// See [`RunRequest::validate_metadata`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_metadata_limits"))]
    pub metadata: Option<BTreeMap<String, String>>,

    /// Stream run events. Transports typically override this per call.
    #[serde(default)]
    pub stream: bool,

    /// Sampling temperature (`temperature`)
    #[serde(
        default,
        rename = "temperature",
        skip_serializing_if = "Option::is_none"
    )]
    pub sampling_temperature: Option<SamplingTemperature>,

    /// Nucleus sampling probability mass (`top_p`), between 0 and 1.
    ///
    /// Set either this or `sampling_temperature`, not both.
    #[serde(default, rename = "top_p", skip_serializing_if = "Option::is_none")]
    pub nucleus_temperature: Option<f64>,

    /// How the thread is truncated before the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncation_strategy: Option<TruncationStrategy>,
}

impl RunRequest {
    /// Minimal request for the given assistant
    pub fn new(assistant_id: impl Into<AssistantId>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            model: None,
            instructions: None,
            additional_instructions: None,
            tools: None,
            metadata: None,
            stream: false,
            sampling_temperature: None,
            nucleus_temperature: None,
            truncation_strategy: None,
        }
    }

    /// Create a builder for run requests
    pub fn builder() -> RunRequestBuilder {
        RunRequestBuilder::new()
    }

    /// Check metadata against the API's entry count and key/value length limits.
    ///
    /// `build()` only calls this when the `strict-metadata` feature is enabled.
    pub fn validate_metadata(&self) -> Result<(), RunError> {
        self.validate().map_err(|e| {
            tracing::warn!("run request metadata rejected: {}", e);
            RunError::from(e)
        })
    }

    /// Serialize to the JSON request body
    pub fn to_json_string(&self) -> Result<String, RunError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a JSON value
    pub fn to_json_value(&self) -> Result<serde_json::Value, RunError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a JSON request body
    pub fn from_json_str(json: &str) -> Result<Self, RunError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn validate_metadata_limits(metadata: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    if metadata.len() > METADATA_MAX_ENTRIES {
        return Err(metadata_error(
            "metadata_entries",
            format!(
                "at most {METADATA_MAX_ENTRIES} entries allowed, got {}",
                metadata.len()
            ),
        ));
    }

    if let Some(key) = metadata
        .keys()
        .find(|k| k.chars().count() > METADATA_MAX_KEY_CHARS)
    {
        return Err(metadata_error(
            "metadata_key_length",
            format!("key `{key}` exceeds {METADATA_MAX_KEY_CHARS} characters"),
        ));
    }

    if let Some(key) = metadata
        .iter()
        .find(|(_, v)| v.chars().count() > METADATA_MAX_VALUE_CHARS)
        .map(|(k, _)| k)
    {
        return Err(metadata_error(
            "metadata_value_length",
            format!("value for key `{key}` exceeds {METADATA_MAX_VALUE_CHARS} characters"),
        ));
    }

    Ok(())
}

fn metadata_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}
