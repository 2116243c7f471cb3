//! Request and response shapes mirrored from the Stables API.
//!
//! Responses are best-effort: every struct is `#[serde(default)]`, so a field the provider
//! stops sending decodes as empty/`None` instead of failing the whole call. Status strings are
//! kept verbatim; the provider owns those state machines.

pub mod api_keys;
pub mod customers;
pub mod quotes;
pub mod transfers;
pub mod virtual_accounts;
pub mod webhooks;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form string metadata attached to most resources.
pub type Metadata = BTreeMap<String, String>;

/// Cursor block returned by paginated list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub next_page_token: Option<String>,
    pub total: Option<u64>,
}

impl PageInfo {
    /// Next-page token, ignoring the empty string some endpoints send on the last page.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Body of endpoints that answer with `{}` (or nothing at all).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}
