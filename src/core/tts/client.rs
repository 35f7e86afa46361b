//! Speech-synthesis client
//!
//! Sends generated text to a speech endpoint and returns the raw audio
//! bytes. The success path is the response body itself, so there is no
//! format-error case here. One attempt per call, bounded by the shared
//! client's timeout.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base_url}/audio/speech`
//! - Success body: binary audio in the configured format

use bytes::Bytes;
use serde_json::json;

use super::config::TtsConfig;
use crate::errors::PipelineError;

/// Service label used in error kinds and log lines
const SERVICE: &str = "TTS";

/// HTTP client for an OpenAI-compatible speech synthesis API
#[derive(Debug, Clone)]
pub struct TtsClient {
    http: reqwest::Client,
    config: TtsConfig,
}

impl TtsClient {
    /// Create a client over a shared HTTP connection pool
    pub fn new(http: reqwest::Client, config: TtsConfig) -> Self {
        Self { http, config }
    }

    /// Synthesize speech for the given text
    ///
    /// Empty input is forwarded as-is: if the upstream rejects it, that
    /// surfaces as an `Upstream` error like any other non-2xx response.
    pub async fn synthesize(&self, text: &str) -> Result<Bytes, PipelineError> {
        tracing::debug!(
            "Requesting speech synthesis: model={} voice={}",
            self.config.model,
            self.config.voice
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(text))
            .send()
            .await
            .map_err(|e| PipelineError::transport(SERVICE, &e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PipelineError::upstream(SERVICE, status.as_u16(), detail));
        }

        response
            .bytes()
            .await
            .map_err(|e| PipelineError::transport(SERVICE, &e))
    }

    fn endpoint(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body(&self, text: &str) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "input": text,
            "voice": self.config.voice,
            "response_format": self.config.response_format,
        })
    }
}
