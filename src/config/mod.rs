//! Configuration module for the Voicebridge Gateway
//!
//! Configuration is read once at process start from environment variables
//! (after an optional `.env` file has been loaded) and never mutated
//! afterwards. Priority: environment variables > `.env` values > defaults.
//!
//! # Example
//! ```rust,no_run
//! use voicebridge_gateway::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;
use std::str::FromStr;

use crate::core::llm::LlmConfig;
use crate::core::tts::TtsConfig;
use crate::core::{llm, tts};
use crate::errors::ConfigError;

/// Default bind host
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
const DEFAULT_PORT: u16 = 8000;

/// Default OpenAI-compatible API base URL, shared by both upstream clients
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default per-request timeout for upstream calls
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Server configuration
///
/// Contains everything needed to run the gateway:
/// - Server settings (host, port, CORS)
/// - Upstream client settings (LLM and TTS, sharing one API key and base URL)
/// - The per-call timeout applied to every upstream request
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: "*" (the gateway serves browser clients from any origin)
    pub cors_allowed_origins: Option<String>,

    /// Timeout applied to each upstream HTTP call
    pub request_timeout_seconds: u64,

    /// Text-generation client settings
    pub llm: LlmConfig,

    /// Speech-synthesis client settings
    pub tts: TtsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// `OPENAI_API_KEY` is the only required variable; everything else has a
    /// default. Returns a `ConfigError` naming the offending variable when a
    /// value is missing or unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = required_var("OPENAI_API_KEY")?;
        let base_url =
            optional_var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let llm = LlmConfig {
            base_url: base_url.clone(),
            api_key: api_key.clone(),
            model: optional_var("LLM_MODEL").unwrap_or_else(|| llm::config::DEFAULT_LLM_MODEL.to_string()),
            system_prompt: optional_var("LLM_SYSTEM_PROMPT")
                .unwrap_or_else(|| llm::config::DEFAULT_SYSTEM_PROMPT.to_string()),
            max_tokens: parsed_var("LLM_MAX_TOKENS", llm::config::DEFAULT_MAX_TOKENS)?,
            temperature: parsed_var("LLM_TEMPERATURE", llm::config::DEFAULT_TEMPERATURE)?,
        };

        let tts = TtsConfig {
            base_url,
            api_key,
            model: optional_var("TTS_MODEL").unwrap_or_else(|| tts::config::DEFAULT_TTS_MODEL.to_string()),
            voice: optional_var("TTS_VOICE").unwrap_or_else(|| tts::config::DEFAULT_TTS_VOICE.to_string()),
            response_format: optional_var("TTS_RESPONSE_FORMAT")
                .unwrap_or_else(|| tts::config::DEFAULT_TTS_FORMAT.to_string()),
        };

        let config = Self {
            host: optional_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed_var("PORT", DEFAULT_PORT)?,
            cors_allowed_origins: optional_var("CORS_ALLOWED_ORIGINS").or_else(|| Some("*".to_string())),
            request_timeout_seconds: parsed_var(
                "REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )?,
            llm,
            tts,
        };

        config.validate()?;
        Ok(config)
    }

    /// The socket address string the server binds to
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidValue {
                name: "LLM_TEMPERATURE",
                reason: format!("must be between 0.0 and 2.0, got {}", self.llm.temperature),
            });
        }
        if self.llm.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                name: "LLM_MAX_TOKENS",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.request_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                name: "REQUEST_TIMEOUT_SECONDS",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Read an environment variable, treating empty/whitespace values as unset
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    optional_var(name).ok_or(ConfigError::MissingVar(name))
}

/// Read and parse an environment variable, falling back to a default when unset
fn parsed_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional_var(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            reason: e.to_string(),
        }),
    }
}
