//! WebSocket route configuration
//!
//! # Endpoint
//!
//! `GET /ws` - WebSocket upgrade for the text-to-speech pipeline
//!
//! # Protocol
//!
//! After the upgrade, clients send text frames:
//!
//! ```json
//! {"text": "Hello"}
//! ```
//!
//! The server answers each frame with exactly one of:
//!
//! ```json
//! {"type": "audio", "audio_data": "<base64>", "llm_text": "..."}
//! {"type": "error", "error_message": "...", "llm_text": ""}
//! ```

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::ws::ws_handler;
use crate::state::AppState;
use std::sync::Arc;

/// Create the WebSocket router
pub fn create_ws_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
}
