//! Process configuration: command line, environment and logging.
//!
//! Settings are resolved once at startup into an immutable [`ClientConfig`]; nothing is
//! re-read afterwards.

use crate::error::ServerError;
use clap::{Parser, ValueEnum};
use stables_client::{ApiClient, ClientConfig, DEFAULT_BASE_URL};
use std::fmt;
use std::io;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, prelude::*};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Stables fiat-to-crypto API exposed as MCP tools over stdio.
#[derive(Parser, Clone)]
#[command(name = "stables-mcp-server", version, about)]
pub struct Cli {
    /// Stables API key (sent as a bearer token)
    #[arg(long, env = "STABLES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the Stables API
    #[arg(long, env = "STABLES_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Log output format (logs always go to stderr)
    #[arg(long, env = "STABLES_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Cli {
    /// Resolve the client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or empty, or the base URL is not an
    /// `http(s)` URL.
    pub fn client_config(&self) -> stables_client::Result<ClientConfig> {
        ClientConfig::new(
            self.api_key.clone().unwrap_or_default(),
            Some(self.api_url.as_str()),
        )
    }
}

impl Cli {
    /// Build the shared API client from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] for a missing key, a bad base URL, or an HTTP client that
    /// cannot be constructed.
    pub fn build_client(&self) -> Result<ApiClient, ServerError> {
        let client = self.client_config().and_then(ApiClient::new)?;
        Ok(client)
    }
}

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` (default `info`). Output goes to stderr because stdout carries
/// the MCP protocol.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = match format {
        LogFormat::Text => registry
            .with(
                tracing_fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stables-mcp-server").chain(args.iter().copied()))
            .expect("parse")
    }

    #[test]
    fn flags_resolve_into_client_config() {
        let cli = parse(&[
            "--api-key",
            "sk_test",
            "--api-url",
            "http://127.0.0.1:8080",
            "--log-format",
            "json",
        ]);
        assert_eq!(cli.log_format, LogFormat::Json);
        let cfg = cli.client_config().expect("config");
        assert_eq!(cfg.base_url().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn empty_key_is_a_config_error() {
        let cli = parse(&["--api-key", "", "--api-url", "http://127.0.0.1:1"]);
        let err = cli.client_config().expect_err("empty key");
        assert!(err.to_string().contains("STABLES_API_KEY"));
    }

    #[test]
    fn startup_config_failures_are_server_config_errors() {
        let cli = parse(&["--api-key", "sk_test", "--api-url", "ftp://example.com"]);
        let err = cli.build_client().expect_err("non-http base url");
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: "), "{err}");

        let cli = parse(&["--api-key", "sk_test", "--api-url", "http://127.0.0.1:1"]);
        assert!(cli.build_client().is_ok());
    }

    #[test]
    fn debug_redacts_key() {
        let cli = parse(&["--api-key", "sk_live_secret", "--api-url", "http://127.0.0.1:1"]);
        assert!(!format!("{cli:?}").contains("sk_live_secret"));
    }
}
