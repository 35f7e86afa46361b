//! WebSocket message types
//!
//! One inbound shape and two outbound shapes. The outbound side is an
//! internally-tagged union so each variant serializes exactly its own
//! fields; the receiver never sees null placeholders for fields that belong
//! to the other variant. The error variant always carries an explicit empty
//! `llm_text` so its wire shape is fixed.

use base64::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Maximum inbound text length, in characters
pub const MAX_TEXT_CHARS: usize = 2000;

// =============================================================================
// Incoming Messages (Client -> Server)
// =============================================================================

/// One inbound request frame: `{"text": "..."}`
///
/// `text` is the only field consulted; unknown fields are ignored. The text
/// is not sanitized here, downstream consumers must treat it as untrusted.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientMessage {
    /// User utterance, 1 to `MAX_TEXT_CHARS` characters
    pub text: String,
}

impl ClientMessage {
    /// Parse and validate one raw inbound frame
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let message: Self = serde_json::from_str(raw).map_err(|_| ValidationError::Malformed)?;
        message.validate()?;
        Ok(message)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        // Bound is measured in characters, not bytes
        let chars = self.text.chars().count();
        if chars == 0 {
            return Err(ValidationError::Empty);
        }
        if chars > MAX_TEXT_CHARS {
            return Err(ValidationError::TooLong);
        }
        Ok(())
    }
}

// =============================================================================
// Outgoing Messages (Server -> Client)
// =============================================================================

/// One outbound response frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// Successful pipeline result
    Audio {
        /// Base64-encoded audio bytes
        audio_data: String,
        /// The generated text the audio was synthesized from
        llm_text: String,
    },

    /// Reported failure; the connection stays open
    Error {
        /// Human-readable description
        error_message: String,
        /// Always empty on the error path
        llm_text: String,
    },
}

impl ServerMessage {
    /// Build a success frame, transport-encoding the audio bytes
    pub fn audio(audio_bytes: &[u8], llm_text: String) -> Self {
        Self::Audio {
            audio_data: BASE64_STANDARD.encode(audio_bytes),
            llm_text,
        }
    }

    /// Build an error frame with the fixed empty `llm_text`
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
            llm_text: String::new(),
        }
    }

    /// Serialize the frame for the wire
    ///
    /// Total: serialization of this enum cannot fail in practice, but if it
    /// ever does the client still gets a well-formed error frame.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize outbound frame: {e}");
            r#"{"type":"error","error_message":"Internal serialization error","llm_text":""}"#
                .to_string()
        })
    }
}
