use crate::error::Result;
use crate::http::{ApiClient, ApiRequest, QueryParams, path_param};
use crate::models::Empty;
use crate::models::api_keys::{
    ApiKeyEnvelope, CreateApiKeyRequest, CreatedApiKey, ListApiKeysParams, ListApiKeysResponse,
};

#[must_use]
pub fn list_api_keys(params: &ListApiKeysParams) -> ApiRequest {
    let query = QueryParams::new()
        .with("pageSize", params.page_size)
        .with("pageToken", params.page_token.as_deref());
    ApiRequest::get("/api/v1/api-keys").with_query(query)
}

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn create_api_key(body: &CreateApiKeyRequest) -> Result<ApiRequest> {
    ApiRequest::post("/api/v1/api-keys").with_json(body)
}

/// # Errors
///
/// Returns an error if `api_key_id` is empty.
pub fn get_api_key(api_key_id: &str) -> Result<ApiRequest> {
    let id = path_param("apiKeyId", api_key_id)?;
    Ok(ApiRequest::get(format!("/api/v1/api-keys/{id}")))
}

/// # Errors
///
/// Returns an error if `api_key_id` is empty.
pub fn revoke_api_key(api_key_id: &str) -> Result<ApiRequest> {
    let id = path_param("apiKeyId", api_key_id)?;
    Ok(ApiRequest::delete(format!("/api/v1/api-keys/{id}")))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_api_keys(&self, params: &ListApiKeysParams) -> Result<ListApiKeysResponse> {
        self.send(list_api_keys(params)).await
    }

    /// Create a key. The returned plaintext secret is never retrievable again.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_api_key(&self, body: &CreateApiKeyRequest) -> Result<CreatedApiKey> {
        self.send(create_api_key(body)?).await
    }

    /// # Errors
    ///
    /// Returns an error if `api_key_id` is empty or the request fails.
    pub async fn get_api_key(&self, api_key_id: &str) -> Result<ApiKeyEnvelope> {
        self.send(get_api_key(api_key_id)?).await
    }

    /// # Errors
    ///
    /// Returns an error if `api_key_id` is empty or the request fails.
    pub async fn revoke_api_key(&self, api_key_id: &str) -> Result<()> {
        let _: Empty = self.send(revoke_api_key(api_key_id)?).await?;
        Ok(())
    }
}
