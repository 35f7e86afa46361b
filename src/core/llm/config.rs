//! Configuration for the text-generation client
//!
//! Everything here is fixed at startup; the user's text is the only
//! per-request input. The system prompt is operator-controlled and is never
//! derived from client data.

/// Default chat completion model
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Default system instruction sent as the first conversational turn
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful voice assistant. Keep your responses short and conversational.";

/// Default cap on generated tokens per response
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Static configuration for chat completion requests
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API (no trailing `/chat/completions`)
    pub base_url: String,
    /// Bearer token for the API
    pub api_key: String,
    /// Model identifier (e.g. "gpt-4o-mini")
    pub model: String,
    /// System instruction prepended to every request
    pub system_prompt: String,
    /// Maximum tokens the model may generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0 to 2.0)
    pub temperature: f64,
}
