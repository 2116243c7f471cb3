use super::{ToolSpec, id, object_schema, string, url};
use crate::error::ToolResult;
use crate::format::webhooks as render;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use stables_client::ApiClient;
use stables_client::models::webhooks::CreateWebhookRequest;

pub(crate) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "create_webhook",
            title: "Create webhook",
            description: "Subscribe to Stables events via webhook. You'll receive POST requests to your URL when events occur.\n\nAvailable event types:\n- WEBHOOK_EVENT_TYPE_CUSTOMER_CREATED\n- WEBHOOK_EVENT_TYPE_CUSTOMER_UPDATED\n- WEBHOOK_EVENT_TYPE_KYC_STATUS_CHANGED\n- WEBHOOK_EVENT_TYPE_PAYMENT_CREATED\n- WEBHOOK_EVENT_TYPE_PAYMENT_STATUS_CHANGED\n- WEBHOOK_EVENT_TYPE_QUOTE_CREATED\n- WEBHOOK_EVENT_TYPE_QUOTE_EXPIRED\n- WEBHOOK_EVENT_TYPE_VA_DEPOSIT_RECEIVED\n- WEBHOOK_EVENT_TYPE_VA_PAYOUT_COMPLETED\n- WEBHOOK_EVENT_TYPE_VA_PAYOUT_FAILED\n- WEBHOOK_EVENT_TYPE_ALL\n\nSecurity: Set a secret to enable HMAC-SHA256 signature verification via X-Webhook-Signature header.",
            action: "create webhook",
            method: Method::POST,
            input_schema: object_schema(
                vec![
                    (
                        "name",
                        string("A descriptive name for this webhook (e.g., 'Payment Status Notifications')"),
                    ),
                    ("url", url("The HTTPS URL to receive webhook POST requests")),
                    (
                        "eventTypes",
                        json!({
                            "type": "array",
                            "items": {"type": "string", "enum": render::EVENT_TYPES},
                            "minItems": 1,
                            "description": "List of event types to subscribe to (e.g., ['WEBHOOK_EVENT_TYPE_PAYMENT_STATUS_CHANGED'])",
                        }),
                    ),
                    (
                        "secret",
                        string("Optional signing secret for HMAC-SHA256 webhook signature verification"),
                    ),
                ],
                &["name", "url", "eventTypes"],
            ),
        },
        ToolSpec {
            name: "list_webhooks",
            title: "List webhooks",
            description: "List all webhook subscriptions for the current account",
            action: "list webhooks",
            method: Method::GET,
            input_schema: object_schema(vec![], &[]),
        },
        ToolSpec {
            name: "delete_webhook",
            title: "Delete webhook",
            description: "Delete a webhook subscription. You will stop receiving events at this endpoint.",
            action: "delete webhook",
            method: Method::DELETE,
            input_schema: object_schema(
                vec![("webhookId", id("The webhook subscription ID to delete"))],
                &["webhookId"],
            ),
        },
    ]
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateWebhookArgs {
    name: String,
    url: String,
    event_types: Vec<String>,
    secret: Option<String>,
}

pub(crate) async fn create_webhook(client: &ApiClient, args: CreateWebhookArgs) -> ToolResult<String> {
    let secret = args.secret.filter(|s| !s.is_empty());
    let secret_configured = secret.is_some();
    let body = CreateWebhookRequest {
        name: args.name,
        url: args.url,
        event_types: args.event_types,
        secret,
        metadata: None,
    };
    let envelope = client.create_webhook(&body).await?;
    Ok(render::webhook_created(&envelope.subscription, secret_configured))
}

pub(crate) async fn list_webhooks(client: &ApiClient) -> ToolResult<String> {
    let response = client.list_webhooks().await?;
    Ok(render::webhook_list(&response.subscriptions))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteWebhookArgs {
    webhook_id: String,
}

pub(crate) async fn delete_webhook(client: &ApiClient, args: DeleteWebhookArgs) -> ToolResult<String> {
    client.delete_webhook(&args.webhook_id).await?;
    Ok(render::webhook_deleted(&args.webhook_id))
}
