use super::{ToolSpec, id, metadata, object_schema, positive_integer, string};
use crate::error::ToolResult;
use crate::format::api_keys as render;
use reqwest::Method;
use serde::Deserialize;
use stables_client::ApiClient;
use stables_client::models::Metadata;
use stables_client::models::api_keys::{CreateApiKeyRequest, ListApiKeysParams};

pub(crate) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "create_api_key",
            title: "Create API key",
            description: "Create a new API key for accessing the Stables API. The secret key is only shown once on creation - save it immediately.",
            action: "create API key",
            method: Method::POST,
            input_schema: object_schema(
                vec![
                    (
                        "name",
                        string("A descriptive name for this API key (e.g., 'Production Bot', 'Agent Smith')"),
                    ),
                    ("metadata", metadata("Optional metadata to attach to the key")),
                ],
                &["name"],
            ),
        },
        ToolSpec {
            name: "list_api_keys",
            title: "List API keys",
            description: "List all API keys for the current account",
            action: "list API keys",
            method: Method::GET,
            input_schema: object_schema(
                vec![
                    ("pageSize", positive_integer("Number of keys per page")),
                    ("pageToken", string("Token for the next page")),
                ],
                &[],
            ),
        },
        ToolSpec {
            name: "get_api_key",
            title: "Get API key",
            description: "Get details about a specific API key",
            action: "get API key",
            method: Method::GET,
            input_schema: object_schema(
                vec![("apiKeyId", id("The API key ID to look up"))],
                &["apiKeyId"],
            ),
        },
        ToolSpec {
            name: "revoke_api_key",
            title: "Revoke API key",
            description: "Revoke an API key. This permanently disables the key and cannot be undone.",
            action: "revoke API key",
            method: Method::DELETE,
            input_schema: object_schema(
                vec![("apiKeyId", id("The API key ID to revoke"))],
                &["apiKeyId"],
            ),
        },
    ]
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateApiKeyArgs {
    name: String,
    metadata: Option<Metadata>,
}

/// The plaintext key goes into the returned text and nowhere else.
pub(crate) async fn create_api_key(client: &ApiClient, args: CreateApiKeyArgs) -> ToolResult<String> {
    let body = CreateApiKeyRequest {
        name: args.name,
        metadata: args.metadata,
    };
    let created = client.create_api_key(&body).await?;
    Ok(render::api_key_created(&created))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListApiKeysArgs {
    page_size: Option<u32>,
    page_token: Option<String>,
}

pub(crate) async fn list_api_keys(client: &ApiClient, args: ListApiKeysArgs) -> ToolResult<String> {
    let params = ListApiKeysParams {
        page_size: args.page_size,
        page_token: args.page_token,
    };
    let response = client.list_api_keys(&params).await?;
    Ok(render::api_key_list(&response.api_keys, response.page.as_ref()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiKeyIdArgs {
    api_key_id: String,
}

pub(crate) async fn get_api_key(client: &ApiClient, args: ApiKeyIdArgs) -> ToolResult<String> {
    let envelope = client.get_api_key(&args.api_key_id).await?;
    Ok(render::api_key_details(&envelope.api_key))
}

pub(crate) async fn revoke_api_key(client: &ApiClient, args: ApiKeyIdArgs) -> ToolResult<String> {
    client.revoke_api_key(&args.api_key_id).await?;
    Ok(render::api_key_revoked(&args.api_key_id))
}
