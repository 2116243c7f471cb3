#![allow(dead_code)]

use rmcp::model::{CallToolResult, JsonObject};
use serde_json::Value;
use stables_client::{ApiClient, ClientConfig};
use stables_mcp_server::StablesServer;
use stables_test_support::StubApi;

pub const API_KEY: &str = "sk_test_integration";

pub fn server_for(stub: &StubApi) -> StablesServer {
    let config = ClientConfig::new(API_KEY, Some(stub.base_url())).expect("config");
    StablesServer::new(ApiClient::new(config).expect("client"))
}

/// `json!({...})` to tool arguments.
pub fn args(value: Value) -> Option<JsonObject> {
    match value {
        Value::Object(map) => Some(map),
        other => panic!("tool arguments must be an object, got {other}"),
    }
}

pub fn text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}
