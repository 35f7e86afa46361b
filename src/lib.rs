pub mod config;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export commonly used items for convenience
pub use config::ServerConfig;
pub use crate::core::{LlmClient, LlmConfig, TtsClient, TtsConfig};
pub use errors::{ConfigError, PipelineError, ValidationError};
pub use state::AppState;
