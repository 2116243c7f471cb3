use super::{Metadata, PageInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKey {
    pub api_key_id: String,
    pub id: Option<String>,
    pub tenant_id: Option<String>,
    pub name: String,
    pub prefix: String,
    pub active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub last_used_at: Option<String>,
    pub metadata: Option<Metadata>,
}

// A record without an `active` flag is a live key; only an explicit `false` means revoked.
impl Default for ApiKey {
    fn default() -> Self {
        Self {
            api_key_id: String::new(),
            id: None,
            tenant_id: None,
            name: String::new(),
            prefix: String::new(),
            active: true,
            created_at: None,
            updated_at: None,
            last_used_at: None,
            metadata: None,
        }
    }
}

impl ApiKey {
    /// `apiKeyId`, falling back to the older `id` field.
    #[must_use]
    pub fn key_id(&self) -> &str {
        if self.api_key_id.is_empty() {
            self.id.as_deref().unwrap_or_default()
        } else {
            &self.api_key_id
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKeyEnvelope {
    pub api_key: ApiKey,
}

/// Creation response. `plaintext_key` is the only time the secret is ever returned.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatedApiKey {
    pub api_key: ApiKey,
    pub plaintext_key: String,
}

impl std::fmt::Debug for CreatedApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatedApiKey")
            .field("api_key", &self.api_key)
            .field("plaintext_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListApiKeysParams {
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListApiKeysResponse {
    pub api_keys: Vec<ApiKey>,
    pub page: Option<PageInfo>,
}
