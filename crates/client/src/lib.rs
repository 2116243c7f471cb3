//! Typed client for the Stables fiat-to-crypto REST API.
//!
//! This crate is intended to be used by:
//! - `stables-mcp-server` (tool handlers)
//!
//! It intentionally contains **no** MCP types and **no** rendering logic. Every operation is
//! split in two: a pure request builder in [`resources`] and a one-shot network call on
//! [`ApiClient`].

pub mod error;
pub mod http;
pub mod models;
pub mod resources;
pub mod safety;

pub use error::{ClientError, Result};
pub use http::{ApiClient, ApiRequest, ClientConfig, DEFAULT_BASE_URL, QueryParams};
