//! WebSocket connection handling
//!
//! `messages` defines the frame shapes exchanged with the client; `handler`
//! owns the per-connection loop that drives the LLM -> TTS pipeline.

mod handler;
pub mod messages;

pub use handler::ws_handler;
pub use messages::{ClientMessage, MAX_TEXT_CHARS, ServerMessage};
