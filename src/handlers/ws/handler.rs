//! WebSocket connection handler
//!
//! One task per connection, strictly sequential within it: each inbound
//! frame is fully resolved (audio frame or error frame sent) before the next
//! one is read, so responses always come back in request order.
//!
//! The loop is the connection state machine. Receiving blocks in
//! Awaiting-Message; a received frame moves to Processing; Processing always
//! produces exactly one outbound frame and returns to Awaiting-Message. The
//! only way out of the loop is a channel failure: the client disconnecting,
//! a transport-level receive error, or a failed send. Pipeline failures
//! never close the connection.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use bytes::Bytes;
use tracing::{debug, error, info, warn};

use super::messages::{ClientMessage, ServerMessage};
use crate::errors::PipelineError;
use crate::state::AppState;

/// Fixed reply for frames that fail validation
const INVALID_FORMAT_MESSAGE: &str = "Invalid message format";

/// WebSocket upgrade handler for `GET /ws`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drive one connection from accept to close
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket connection established");

    loop {
        // Awaiting-Message
        let raw = match socket.recv().await {
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(Message::Binary(_))) => {
                // Binary is not a legal inbound shape; report and keep going
                if send_frame(&mut socket, &ServerMessage::error(INVALID_FORMAT_MESSAGE))
                    .await
                    .is_err()
                {
                    break;
                }
                continue;
            }
            Some(Ok(Message::Ping(_) | Message::Pong(_))) => continue,
            Some(Ok(Message::Close(_))) => {
                debug!("Close frame received from client");
                break;
            }
            Some(Err(e)) => {
                warn!("WebSocket receive error: {e}");
                break;
            }
            None => {
                info!("WebSocket connection closed by client");
                break;
            }
        };

        // Processing: always yields exactly one outbound frame
        let reply = process_frame(&state, raw.as_str()).await;

        if send_frame(&mut socket, &reply).await.is_err() {
            warn!("WebSocket send failed, closing connection");
            break;
        }
    }

    // Single close path for every loop exit; closing an already-gone socket
    // is not an error worth surfacing
    if let Err(e) = socket.send(Message::Close(None)).await {
        debug!("WebSocket close handshake skipped: {e}");
    }

    info!("WebSocket connection terminated");
}

/// Run one inbound frame through validate -> generate -> synthesize -> encode
///
/// Total by construction: every failure becomes an error frame.
async fn process_frame(state: &AppState, raw: &str) -> ServerMessage {
    let message = match ClientMessage::parse(raw) {
        Ok(message) => message,
        Err(e) => {
            warn!("Rejected inbound frame: {e}");
            return ServerMessage::error(INVALID_FORMAT_MESSAGE);
        }
    };

    match run_pipeline(state, &message.text).await {
        Ok((audio, llm_text)) => {
            debug!("Pipeline produced {} audio bytes", audio.len());
            ServerMessage::audio(&audio, llm_text)
        }
        Err(e) => {
            error!("LLM-TTS pipeline failed: {e}");
            ServerMessage::error(format!("Processing error: {e}"))
        }
    }
}

/// The two dependent upstream calls
///
/// A text-generation failure short-circuits before any synthesis call is
/// made. Empty generated text is still forwarded to synthesis; whether to
/// accept it is the upstream's decision.
async fn run_pipeline(state: &AppState, user_text: &str) -> Result<(Bytes, String), PipelineError> {
    let llm_text = state.llm.generate(user_text).await?;
    let audio = state.tts.synthesize(&llm_text).await?;
    Ok((audio, llm_text))
}

async fn send_frame(socket: &mut WebSocket, message: &ServerMessage) -> Result<(), axum::Error> {
    socket.send(Message::Text(message.encode().into())).await
}
