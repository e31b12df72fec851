//! Run resource types
//!
//! A run is one execution of an assistant against a thread, optionally
//! overriding the model, instructions or tools for that execution only.

mod builder;
mod request;

#[cfg(test)]
mod tests;

pub use builder::RunRequestBuilder;
pub use request::{
    METADATA_MAX_ENTRIES, METADATA_MAX_KEY_CHARS, METADATA_MAX_VALUE_CHARS, RunRequest,
};

use crate::error::RunError;

/// Configure a fresh [`RunRequestBuilder`] in place and build it.
///
/// ```rust,ignore
/// let request = run_request(|b| {
///     b.assistant_id = Some("asst_123".into());
///     b.temperature = TemperatureParam::nucleus(25).ok();
/// })?;
/// ```
pub fn run_request(configure: impl FnOnce(&mut RunRequestBuilder)) -> Result<RunRequest, RunError> {
    let mut builder = RunRequestBuilder::new();
    configure(&mut builder);
    builder.build()
}
