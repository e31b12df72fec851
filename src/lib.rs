//! run-spec
//!
//! Request models for the assistants "Run" resource.
//!
//! This crate only describes the create-run request body: its fields, the
//! validated sampling parameters, the truncation strategy and a builder.
//! HTTP transport, authentication, retries and streaming live elsewhere.
#![deny(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{Result, RunError};
pub use types::*;
