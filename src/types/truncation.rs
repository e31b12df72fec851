//! Thread truncation strategies.

use serde::{Deserialize, Serialize};

/// Controls how a thread is truncated before a run starts, i.e. the initial
/// context window of the run.
///
/// Serialized with a `type` discriminator so new strategies can be added
/// without changing the shape of existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TruncationStrategy {
    /// Keep only the `last_messages` most recent messages of the thread
    LastMessages {
        /// Number of most recent messages to keep
        last_messages: u32,
    },
}

impl TruncationStrategy {
    /// Keep the `count` most recent messages
    pub const fn last_messages(count: u32) -> Self {
        Self::LastMessages {
            last_messages: count,
        }
    }

    /// Message count if this is a `last_messages` strategy
    pub const fn last_messages_count(&self) -> Option<u32> {
        match self {
            Self::LastMessages { last_messages } => Some(*last_messages),
        }
    }
}
