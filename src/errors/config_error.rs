//! Configuration errors
//!
//! Raised while loading and validating `ServerConfig` at startup. These are
//! the only errors that abort the process; everything after startup is
//! reported to the client instead.

use thiserror::Error;

/// Errors produced while assembling the server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set (or set to an empty value)
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable is set but its value is unusable
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Environment variable name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The shared HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_display() {
        let err = ConfigError::MissingVar("OPENAI_API_KEY");
        assert_eq!(
            err.to_string(),
            "missing required environment variable: OPENAI_API_KEY"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            name: "PORT",
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for PORT: not a number");
    }
}
