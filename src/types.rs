//! Core Data Type Definitions
//!
//! ## Module Organization
//!
//! - **`ids`** - Assistant and model identifiers
//! - **`params`** - Sampling parameters (`temperature` / `top_p`)
//! - **`tools`** - Tools a run may override
//! - **`truncation`** - Thread truncation strategies
//! - **`run/`** - The create-run request and its builder
//!
//! Everything is re-exported at this root:
//!
//! ```rust,ignore
//! use run_spec::types::{RunRequest, TemperatureParam, TruncationStrategy};
//! ```

pub mod ids;
pub mod params;
pub mod run;
pub mod tools;
pub mod truncation;

pub use ids::*;
pub use params::*;
pub use run::*;
pub use tools::*;
pub use truncation::*;
