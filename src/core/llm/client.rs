//! Text-generation client
//!
//! Sends one user utterance to a chat-style completion endpoint and returns
//! the generated text. Exactly one attempt per call; the shared HTTP
//! client's timeout bounds the request. No retry, no streaming.
//!
//! # API Reference
//!
//! - Endpoint: `POST {base_url}/chat/completions`
//! - Success body: JSON with `choices[0].message.content`

use serde::Deserialize;
use serde_json::json;

use super::config::LlmConfig;
use crate::errors::PipelineError;

/// Service label used in error kinds and log lines
const SERVICE: &str = "LLM";

/// HTTP client for an OpenAI-compatible chat completion API
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    config: LlmConfig,
}

/// Subset of the chat completion response the gateway consumes
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl LlmClient {
    /// Create a client over a shared HTTP connection pool
    pub fn new(http: reqwest::Client, config: LlmConfig) -> Self {
        Self { http, config }
    }

    /// Generate a response for one user utterance
    ///
    /// Returns the first choice's message content verbatim. Any other
    /// response shape is a `Format` error; non-2xx statuses and transport
    /// failures surface as `Upstream` and `Transport` respectively.
    pub async fn generate(&self, user_text: &str) -> Result<String, PipelineError> {
        tracing::debug!("Requesting chat completion from model {}", self.config.model);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(user_text))
            .send()
            .await
            .map_err(|e| PipelineError::transport(SERVICE, &e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PipelineError::upstream(SERVICE, status.as_u16(), detail));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::format(SERVICE, format!("failed to decode body: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| PipelineError::format(SERVICE, "response contained no choices"))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the request body; only `user_text` varies per call
    fn request_body(&self, user_text: &str) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": self.config.system_prompt},
                {"role": "user", "content": user_text},
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LlmConfig {
        LlmConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test_key".to_string(),
            model: "gpt-4o-mini".to_string(),
            system_prompt: "Be brief.".to_string(),
            max_tokens: 150,
            temperature: 0.7,
        }
    }

    #[test]
    fn test_endpoint_joins_path() {
        let client = LlmClient::new(reqwest::Client::new(), test_config());
        assert_eq!(
            client.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let mut config = test_config();
        config.base_url = "https://api.openai.com/v1/".to_string();
        let client = LlmClient::new(reqwest::Client::new(), config);
        assert_eq!(
            client.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let client = LlmClient::new(reqwest::Client::new(), test_config());
        let body = client.request_body("Hello");

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["temperature"], 0.7);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "Be brief.");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Hello");
    }

    #[test]
    fn test_response_parsing() {
        let raw = serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hi there"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 5, "completion_tokens": 2}
        });
        let parsed: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Hi there");
    }

    #[test]
    fn test_response_missing_content_is_rejected() {
        let raw = serde_json::json!({
            "choices": [{"index": 0, "message": {"role": "assistant"}}]
        });
        let parsed: Result<ChatCompletionResponse, _> = serde_json::from_value(raw);
        assert!(parsed.is_err());
    }
}
