//! Text-generation client for OpenAI-compatible chat completion APIs

mod client;
pub mod config;

pub use client::LlmClient;
pub use config::LlmConfig;
