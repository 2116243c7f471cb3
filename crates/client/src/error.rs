//! Error types for `stables-client`.

use thiserror::Error;

/// Main error type for API operations.
///
/// Upstream and transport failures both render as a bare human message, so callers can prefix
/// them with the action being attempted without caring which one happened.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration errors (missing credential, invalid base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// An operation was given an argument it cannot shape into a request (e.g. empty path id).
    #[error("{0}")]
    InvalidArgument(String),

    /// Non-2xx response, normalized to a single message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Network failures (connect, TLS, body read).
    #[error("{0}")]
    Transport(String),

    /// A 2xx response whose body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status of an upstream error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(crate::safety::sanitize_reqwest_error(&value))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
