//! Speech-synthesis client for OpenAI-compatible speech APIs

mod client;
pub mod config;

pub use client::TtsClient;
pub use config::TtsConfig;
