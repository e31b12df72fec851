//! Builder for [`RunRequest`].

use super::request::RunRequest;
use crate::error::RunError;
use crate::types::{
    AssistantId, AssistantTool, ModelId, SamplingTemperature, TemperatureParam,
    TruncationStrategy,
};
use std::collections::BTreeMap;

/// Staging area for a [`RunRequest`].
///
/// Every slot is public so it can be filled in place (see
/// [`run_request`](super::run_request)); the chainable setters do the same
/// thing. `temperature` and `top_p` share one slot, [`TemperatureParam`], so
/// at most one of them ends up in the request.
///
/// `build` borrows the builder, so it can be built again after further edits.
#[derive(Debug, Clone, Default)]
pub struct RunRequestBuilder {
    /// The assistant that executes this run (required)
    pub assistant_id: Option<AssistantId>,
    /// Model override
    pub model: Option<ModelId>,
    /// Instructions override
    pub instructions: Option<String>,
    /// Instructions appended to the assistant's own
    pub additional_instructions: Option<String>,
    /// Tools override
    pub tools: Option<Vec<AssistantTool>>,
    /// Metadata key-value pairs
    pub metadata: Option<BTreeMap<String, String>>,
    /// Stream run events
    pub stream: bool,
    /// Randomness control, resolved into `temperature` or `top_p`
    pub temperature: Option<TemperatureParam>,
    /// Thread truncation policy
    pub truncation_strategy: Option<TruncationStrategy>,
}

impl RunRequestBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assistant ID
    pub fn assistant_id(mut self, assistant_id: impl Into<AssistantId>) -> Self {
        self.assistant_id = Some(assistant_id.into());
        self
    }

    /// Override the model
    pub fn model(mut self, model: impl Into<ModelId>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Append additional instructions
    pub fn additional_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.additional_instructions = Some(instructions.into());
        self
    }

    /// Replace the tool list
    pub fn tools(mut self, tools: Vec<AssistantTool>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Append one tool
    pub fn add_tool(mut self, tool: AssistantTool) -> Self {
        self.tools.get_or_insert_with(Vec::new).push(tool);
        self
    }

    /// Replace the metadata map
    pub fn metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Insert one metadata entry
    pub fn add_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Enable or disable event streaming
    pub const fn stream(mut self, enabled: bool) -> Self {
        self.stream = enabled;
        self
    }

    /// Choose the randomness control
    pub fn temperature(mut self, temperature: impl Into<TemperatureParam>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    /// Set the truncation strategy
    pub const fn truncation_strategy(mut self, strategy: TruncationStrategy) -> Self {
        self.truncation_strategy = Some(strategy);
        self
    }

    /// Build the [`RunRequest`]
    pub fn build(&self) -> Result<RunRequest, RunError> {
        let assistant_id = self
            .assistant_id
            .clone()
            .ok_or(RunError::MissingRequiredField("assistant_id"))?;

        let (sampling_temperature, nucleus_temperature) = split_temperature(self.temperature);

        let request = RunRequest {
            assistant_id,
            model: self.model.clone(),
            instructions: self.instructions.clone(),
            additional_instructions: self.additional_instructions.clone(),
            tools: self.tools.clone(),
            metadata: self.metadata.clone(),
            stream: self.stream,
            sampling_temperature,
            nucleus_temperature,
            truncation_strategy: self.truncation_strategy,
        };

        #[cfg(feature = "strict-metadata")]
        request.validate_metadata()?;

        Ok(request)
    }
}

fn split_temperature(param: Option<TemperatureParam>) -> (Option<SamplingTemperature>, Option<f64>) {
    match param {
        Some(TemperatureParam::Sampling(t)) => {
            tracing::debug!("run request uses sampling temperature {}", t.value());
            (Some(t), None)
        }
        Some(TemperatureParam::Nucleus(p)) => {
            tracing::debug!(
                "run request uses nucleus sampling: {}% -> top_p {}",
                p.percent(),
                p.top_p()
            );
            (None, Some(p.top_p()))
        }
        None => (None, None),
    }
}
