//! The tool catalog.
//!
//! Each resource module contributes its [`ToolSpec`]s (name, description, input schema,
//! backing HTTP method) and one async handler per tool. A handler turns validated arguments
//! into one client call and hands the response to a renderer in [`crate::format`].

pub mod api_keys;
pub mod customers;
pub mod quotes;
pub mod transfers;
pub mod virtual_accounts;
pub mod webhooks;

use crate::error::{ToolError, ToolResult};
use crate::semantics::annotations_for_method;
use reqwest::Method;
use rmcp::model::{JsonObject, Tool};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use stables_client::ApiClient;
use std::sync::Arc;

/// Static description of one tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Completes "Failed to ..." in error results.
    pub action: &'static str,
    /// Method of the single upstream request this tool performs.
    pub method: Method,
    pub input_schema: Value,
}

impl ToolSpec {
    /// MCP view of this spec.
    #[must_use]
    pub fn to_tool(&self) -> Tool {
        let schema_obj = self
            .input_schema
            .as_object()
            .cloned()
            .unwrap_or_else(JsonObject::new);
        let mut tool = Tool::new(self.name, self.description, Arc::new(schema_obj));
        tool.title = Some(self.title.to_string());
        tool.annotations = Some(annotations_for_method(self.title, &self.method));
        tool
    }
}

/// Every tool, grouped by resource.
#[must_use]
pub fn catalog() -> Vec<ToolSpec> {
    let mut specs = customers::specs();
    specs.extend(quotes::specs());
    specs.extend(transfers::specs());
    specs.extend(virtual_accounts::specs());
    specs.extend(api_keys::specs());
    specs.extend(webhooks::specs());
    specs
}

/// Route a validated call to its handler.
///
/// # Errors
///
/// Returns [`ToolError::InvalidParams`] if `name` is unknown or the arguments do not decode,
/// and [`ToolError::Client`] if the upstream call fails.
pub async fn dispatch(client: &ApiClient, name: &str, args: Value) -> ToolResult<String> {
    match name {
        "create_customer" => customers::create_customer(client, parse_args(args)?).await,
        "get_customer" => customers::get_customer(client, parse_args(args)?).await,
        "list_customers" => customers::list_customers(client).await,
        "update_customer" => customers::update_customer(client, parse_args(args)?).await,
        "update_customer_metadata" => {
            customers::update_customer_metadata(client, parse_args(args)?).await
        }
        "get_verification_link" => {
            customers::get_verification_link(client, parse_args(args)?).await
        }

        "create_quote" => quotes::create_quote(client, parse_args(args)?).await,
        "get_quote" => quotes::get_quote(client, parse_args(args)?).await,

        "create_transfer" => transfers::create_transfer(client, parse_args(args)?).await,
        "get_transfer" => transfers::get_transfer(client, parse_args(args)?).await,
        "list_transfers" => transfers::list_transfers(client, parse_args(args)?).await,

        "create_virtual_account" => {
            virtual_accounts::create_virtual_account(client, parse_args(args)?).await
        }
        "list_virtual_accounts" => {
            virtual_accounts::list_virtual_accounts(client, parse_args(args)?).await
        }
        "list_all_virtual_accounts" => {
            virtual_accounts::list_all_virtual_accounts(client, parse_args(args)?).await
        }
        "update_virtual_account" => {
            virtual_accounts::update_virtual_account(client, parse_args(args)?).await
        }
        "deactivate_virtual_account" => {
            virtual_accounts::deactivate_virtual_account(client, parse_args(args)?).await
        }
        "reactivate_virtual_account" => {
            virtual_accounts::reactivate_virtual_account(client, parse_args(args)?).await
        }
        "get_virtual_account_history" => {
            virtual_accounts::get_virtual_account_history(client, parse_args(args)?).await
        }

        "create_api_key" => api_keys::create_api_key(client, parse_args(args)?).await,
        "list_api_keys" => api_keys::list_api_keys(client, parse_args(args)?).await,
        "get_api_key" => api_keys::get_api_key(client, parse_args(args)?).await,
        "revoke_api_key" => api_keys::revoke_api_key(client, parse_args(args)?).await,

        "create_webhook" => webhooks::create_webhook(client, parse_args(args)?).await,
        "list_webhooks" => webhooks::list_webhooks(client).await,
        "delete_webhook" => webhooks::delete_webhook(client, parse_args(args)?).await,

        other => Err(ToolError::InvalidParams(format!("unknown tool '{other}'"))),
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> ToolResult<T> {
    serde_json::from_value(args).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

// Schema builders. Every tool schema is a flat object.

pub(crate) fn object_schema(properties: Vec<(&str, Value)>, required: &[&str]) -> Value {
    let props: Map<String, Value> = properties
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    json!({
        "type": "object",
        "properties": props,
        "required": required,
        "additionalProperties": false,
    })
}

pub(crate) fn string(description: &str) -> Value {
    json!({"type": "string", "description": description})
}

/// A string that must be non-empty (ids interpolated into paths).
pub(crate) fn id(description: &str) -> Value {
    json!({"type": "string", "minLength": 1, "description": description})
}

pub(crate) fn string_enum(values: &[&str], description: &str) -> Value {
    json!({"type": "string", "enum": values, "description": description})
}

pub(crate) fn positive_integer(description: &str) -> Value {
    json!({"type": "integer", "minimum": 1, "description": description})
}

pub(crate) fn string_list(description: &str) -> Value {
    json!({"type": "array", "items": {"type": "string"}, "description": description})
}

pub(crate) fn metadata(description: &str) -> Value {
    json!({
        "type": "object",
        "additionalProperties": {"type": "string"},
        "description": description,
    })
}

pub(crate) fn email(description: &str) -> Value {
    json!({
        "type": "string",
        "pattern": "^[^@\\s]+@[^@\\s]+\\.[^@\\s]+$",
        "description": description,
    })
}

pub(crate) fn url(description: &str) -> Value {
    json!({"type": "string", "pattern": "^https?://", "description": description})
}
