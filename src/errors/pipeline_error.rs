//! Per-message error taxonomy
//!
//! Every failure inside the validate -> generate -> synthesize pipeline maps
//! to one of these kinds so the connection handler can branch on kind rather
//! than on message text. None of them is fatal to the connection: each one
//! becomes an error frame and the session keeps going. Only a broken client
//! socket (surfaced as an `axum::Error` from send/receive) closes a session.

use thiserror::Error;

/// Maximum number of characters of an upstream error body kept in the detail
const MAX_DETAIL_CHARS: usize = 300;

/// Rejection of a single inbound client frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload is not a JSON object with a string `text` field
    #[error("payload is not a valid client message")]
    Malformed,

    /// The `text` field is present but empty
    #[error("text must not be empty")]
    Empty,

    /// The `text` field exceeds the per-message character limit
    #[error("text exceeds the maximum message length")]
    TooLong,
}

/// Failure of one upstream call inside the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The remote service answered with a non-success status
    #[error("{service} error: status {status}: {detail}")]
    Upstream {
        /// Which upstream service failed ("LLM" or "TTS")
        service: &'static str,
        /// HTTP status code returned by the service
        status: u16,
        /// Response body, truncated
        detail: String,
    },

    /// The remote service answered 2xx but the body had an unexpected shape
    #[error("invalid {service} response format: {detail}")]
    Format {
        service: &'static str,
        detail: String,
    },

    /// The remote service could not be reached or timed out
    #[error("{service} request failed: {detail}")]
    Transport {
        service: &'static str,
        detail: String,
    },
}

impl PipelineError {
    /// Build an `Upstream` error, truncating an oversized response body
    pub fn upstream(service: &'static str, status: u16, detail: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            status,
            detail: truncate_detail(detail.into()),
        }
    }

    /// Build a `Format` error
    pub fn format(service: &'static str, detail: impl Into<String>) -> Self {
        Self::Format {
            service,
            detail: detail.into(),
        }
    }

    /// Map a `reqwest` transport failure, normalizing the common cases
    pub fn transport(service: &'static str, err: &reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        Self::Transport { service, detail }
    }
}

fn truncate_detail(detail: String) -> String {
    if detail.chars().count() <= MAX_DETAIL_CHARS {
        detail
    } else {
        detail.chars().take(MAX_DETAIL_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_display() {
        let err = PipelineError::upstream("LLM", 500, "internal error");
        assert_eq!(err.to_string(), "LLM error: status 500: internal error");
    }

    #[test]
    fn test_format_display() {
        let err = PipelineError::format("LLM", "response contained no choices");
        assert_eq!(
            err.to_string(),
            "invalid LLM response format: response contained no choices"
        );
    }

    #[test]
    fn test_transport_display() {
        let err = PipelineError::Transport {
            service: "TTS",
            detail: "request timed out".to_string(),
        };
        assert_eq!(err.to_string(), "TTS request failed: request timed out");
    }

    #[test]
    fn test_upstream_detail_truncated() {
        let body = "x".repeat(2000);
        let err = PipelineError::upstream("TTS", 502, body);
        match err {
            PipelineError::Upstream { detail, .. } => {
                assert_eq!(detail.chars().count(), MAX_DETAIL_CHARS);
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Malformed.to_string(),
            "payload is not a valid client message"
        );
        assert_eq!(ValidationError::Empty.to_string(), "text must not be empty");
    }
}
