//! Error types for the gateway
//!
//! Split by concern: configuration errors are fatal at startup, pipeline
//! errors are per-message and always recoverable, validation errors reject
//! a single inbound frame.

pub mod config_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use pipeline_error::{PipelineError, ValidationError};
