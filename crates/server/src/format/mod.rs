//! Text rendering of API responses.
//!
//! Renderers are pure: they take decoded response models (and, where a value depends on the
//! current time, an explicit `now`) and return the text block handed back to the agent.
//! Optional fields that are absent are left out rather than printed as empty.

pub mod api_keys;
pub mod customers;
pub mod quotes;
pub mod transfers;
pub mod virtual_accounts;
pub mod webhooks;

use std::fmt::Display;

/// Error text for a failed invocation: `Failed to <action>: <reason>`.
#[must_use]
pub fn failure(action: &str, reason: &impl Display) -> String {
    format!("Failed to {action}: {reason}")
}

/// Line-oriented text builder.
#[derive(Debug, Default)]
pub(crate) struct Text {
    lines: Vec<String>,
}

impl Text {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// `label: value`, always.
    pub(crate) fn field(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.lines.push(format!("{label}: {value}"));
        self
    }

    /// `label: value` only when a non-empty value is present.
    pub(crate) fn opt_field(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.lines.push(format!("{label}: {v}"));
        }
        self
    }

    pub(crate) fn finish(&self) -> String {
        self.lines.join("\n")
    }
}

/// Timestamp or a placeholder when the provider omitted it.
pub(crate) fn timestamp(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("unknown")
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// `"First Last"`, `"First Middle Last"`, or `None` without a first name.
pub(crate) fn full_name(
    first: Option<&str>,
    middle: Option<&str>,
    last: Option<&str>,
) -> Option<String> {
    let first = first.filter(|s| !s.is_empty())?;
    let parts: Vec<&str> = [Some(first), middle, last]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    Some(parts.join(" "))
}
