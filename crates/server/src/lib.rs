//! MCP server exposing the Stables fiat-to-crypto API as agent tools.
//!
//! The binary wires [`config::Cli`] into a [`stables_client::ApiClient`] and serves
//! [`StablesServer`] over stdio. The library surface exists so integration tests can drive the
//! same server in-process.

pub mod config;
pub mod error;
pub mod format;
pub mod semantics;
pub mod server;
pub mod tools;
pub mod validation;

pub use server::StablesServer;
