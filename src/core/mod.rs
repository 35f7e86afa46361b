//! Upstream service clients
//!
//! One client per upstream AI capability: `llm` for chat-completion text
//! generation, `tts` for speech synthesis. Both share a pooled
//! `reqwest::Client` and carry only immutable configuration.

pub mod llm;
pub mod tts;

pub use llm::{LlmClient, LlmConfig};
pub use tts::{TtsClient, TtsConfig};
