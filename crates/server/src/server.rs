//! The MCP server: tool listing and invocation over an rmcp transport.

use crate::error::ToolError;
use crate::format::failure;
use crate::tools::{self, ToolSpec};
use crate::validation::{find_similar_strings, validate_arguments};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use stables_client::ApiClient;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

const INSTRUCTIONS: &str = "Tools for the Stables fiat-to-crypto API.\n\
Typical off-ramp flow: create_customer -> get_verification_link (customer completes KYC) -> \
create_quote -> create_transfer (before the quote expires) -> get_transfer.\n\
Virtual accounts receive fiat deposits for a verified customer and can pay out to a wallet.";

/// Exposes the Stables API as MCP tools.
///
/// Stateless apart from the shared HTTP client: every call is validated, performs at most one
/// upstream request, and renders its outcome as text.
#[derive(Clone)]
pub struct StablesServer {
    client: ApiClient,
    catalog: Arc<Vec<ToolSpec>>,
}

impl StablesServer {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            catalog: Arc::new(tools::catalog()),
        }
    }

    /// MCP tool descriptors, in catalog order.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.catalog.iter().map(ToolSpec::to_tool).collect()
    }

    fn spec(&self, name: &str) -> Option<&ToolSpec> {
        self.catalog.iter().find(|s| s.name == name)
    }

    /// Run one tool call to completion.
    ///
    /// Never fails at the protocol level: unknown tools, rejected arguments and upstream
    /// errors all come back as an error result whose text explains what went wrong.
    pub async fn invoke(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let Some(spec) = self.spec(name) else {
            let known: Vec<&str> = self.catalog.iter().map(|s| s.name).collect();
            let text = match find_similar_strings(name, &known).first() {
                Some(s) => format!("Unknown tool '{name}' (did you mean '{s}'?)"),
                None => format!("Unknown tool '{name}'"),
            };
            tracing::warn!(tool = %name, "unknown tool");
            return CallToolResult::error(vec![Content::text(text)]);
        };

        let span = tracing::info_span!("tool_call", tool = spec.name);
        async move {
            let args = Value::Object(arguments.unwrap_or_default());
            if let Err(reason) = validate_arguments(&spec.input_schema, &args) {
                tracing::info!("arguments rejected");
                let err = ToolError::InvalidParams(reason);
                return CallToolResult::error(vec![Content::text(failure(spec.action, &err))]);
            }

            let started = Instant::now();
            match tools::dispatch(&self.client, spec.name, args).await {
                Ok(text) => {
                    tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "tool call succeeded");
                    CallToolResult::success(vec![Content::text(text)])
                }
                Err(err) => {
                    tracing::warn!(
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        validation = err.is_validation(),
                        error = %err,
                        "tool call failed"
                    );
                    CallToolResult::error(vec![Content::text(failure(spec.action, &err))])
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl ServerHandler for StablesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stables-mcp-server".to_string(),
                title: Some("Stables".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.tools())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { Ok(self.invoke(&request.name, request.arguments).await) }
    }
}
