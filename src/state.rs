//! Shared application state
//!
//! Built once at startup and shared read-only across all connections. The
//! two upstream clients ride on a single pooled `reqwest::Client` so
//! concurrent connections reuse TCP/TLS sessions; every outbound call is
//! still independently parameterized.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::core::llm::LlmClient;
use crate::core::tts::TtsClient;
use crate::errors::ConfigError;

/// Application state shared across all routes and connections
pub struct AppState {
    /// Immutable server configuration
    pub config: ServerConfig,
    /// Text-generation client
    pub llm: LlmClient,
    /// Speech-synthesis client
    pub tts: TtsClient,
}

impl AppState {
    /// Build the shared state and upstream clients from configuration
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        let llm = LlmClient::new(http.clone(), config.llm.clone());
        let tts = TtsClient::new(http, config.tts.clone());

        Ok(Arc::new(Self { config, llm, tts }))
    }
}
