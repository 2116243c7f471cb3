//! HTTP method semantics for tool annotations.
//!
//! Every Stables tool maps to exactly one upstream request, so its MCP `ToolAnnotations`
//! follow the RFC 9110 meaning of that request's method.

use reqwest::Method;
use rmcp::model::ToolAnnotations;

/// Annotations for a tool backed by one `method` request.
///
/// `openWorldHint` is always `true`: every tool talks to the remote API.
#[must_use]
pub fn annotations_for_method(title: &str, method: &Method) -> ToolAnnotations {
    let (read_only, destructive, idempotent) =
        if method == Method::GET || method == Method::HEAD || method == Method::OPTIONS {
            (Some(true), Some(false), Some(true))
        } else if method == Method::POST {
            (Some(false), Some(false), Some(false))
        } else if method == Method::PUT || method == Method::DELETE {
            (Some(false), Some(true), Some(true))
        } else if method == Method::PATCH {
            // PATCH may or may not be idempotent; do not guess.
            (Some(false), Some(true), None)
        } else {
            (None, None, None)
        };

    ToolAnnotations {
        title: Some(title.to_string()),
        read_only_hint: read_only,
        destructive_hint: destructive,
        idempotent_hint: idempotent,
        open_world_hint: Some(true),
    }
}
