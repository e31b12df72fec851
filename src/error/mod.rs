//! Error handling types for run-spec.
//!
//! Every failure in this crate happens synchronously at construction time,
//! so a single error enum covers builders, parameter wrappers and JSON helpers.

mod conversions;
pub mod types;

pub use types::*;
