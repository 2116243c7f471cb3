use crate::error::Result;
use crate::http::{ApiClient, ApiRequest, path_param};
use crate::models::Empty;
use crate::models::webhooks::{CreateWebhookRequest, ListWebhooksResponse, WebhookEnvelope};

#[must_use]
pub fn list_webhooks() -> ApiRequest {
    ApiRequest::get("/api/v1/webhooks")
}

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn create_webhook(body: &CreateWebhookRequest) -> Result<ApiRequest> {
    ApiRequest::post("/api/v1/webhooks").with_json(body)
}

/// # Errors
///
/// Returns an error if `subscription_id` is empty.
pub fn delete_webhook(subscription_id: &str) -> Result<ApiRequest> {
    let id = path_param("subscriptionId", subscription_id)?;
    Ok(ApiRequest::delete(format!("/api/v1/webhooks/{id}")))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_webhooks(&self) -> Result<ListWebhooksResponse> {
        self.send(list_webhooks()).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_webhook(&self, body: &CreateWebhookRequest) -> Result<WebhookEnvelope> {
        self.send(create_webhook(body)?).await
    }

    /// # Errors
    ///
    /// Returns an error if `subscription_id` is empty or the request fails.
    pub async fn delete_webhook(&self, subscription_id: &str) -> Result<()> {
        let _: Empty = self.send(delete_webhook(subscription_id)?).await?;
        Ok(())
    }
}
