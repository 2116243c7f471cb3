//! Error types for the MCP server.

use stables_client::ClientError;
use thiserror::Error;

/// Startup errors. Any of these ends the process before a single tool is served.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Missing credential, malformed base URL, HTTP client construction
    #[error(transparent)]
    Config(#[from] ClientError),

    /// The stdio transport failed to initialize or terminated abnormally
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Per-invocation failure. Always rendered into an error tool result, never propagated.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Arguments rejected before any network call
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// The upstream call failed (non-2xx, transport, decode)
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ToolError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidParams(_) | Self::Client(ClientError::InvalidArgument(_))
        )
    }
}

/// Result type alias for tool handlers.
pub type ToolResult<T> = std::result::Result<T, ToolError>;
