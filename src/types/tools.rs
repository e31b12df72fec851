//! Assistant tool definitions
//!
//! A run may override the tools its assistant can use. Each tool serializes
//! as an object tagged by `type`.

use serde::{Deserialize, Serialize};

/// Tool an assistant can call during a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssistantTool {
    /// Hosted code interpreter
    CodeInterpreter,
    /// Hosted file search over the assistant's vector stores
    FileSearch,
    /// Caller-defined function
    Function {
        /// Function definition
        function: FunctionTool,
    },
}

impl AssistantTool {
    /// Create a code interpreter tool
    pub const fn code_interpreter() -> Self {
        Self::CodeInterpreter
    }

    /// Create a file search tool
    pub const fn file_search() -> Self {
        Self::FileSearch
    }

    /// Create a function tool
    pub fn function(function: FunctionTool) -> Self {
        Self::Function { function }
    }

    /// Function name if this is a function tool
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::Function { function } => Some(&function.name),
            _ => None,
        }
    }
}

/// Function tool definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionTool {
    /// Function name
    pub name: String,
    /// What the function does, used by the model to decide when to call it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON schema for function parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

impl FunctionTool {
    /// Create a function definition with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters: None,
        }
    }

    /// Set the function description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the JSON schema for the parameters
    pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
        self.parameters = Some(parameters);
        self
    }
}
