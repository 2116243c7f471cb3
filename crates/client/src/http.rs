//! HTTP client wrapper.
//!
//! One [`ApiRequest`] becomes exactly one outbound call: bearer credential attached, a fresh
//! idempotency key on mutating methods, JSON body only when one is present. Non-2xx responses
//! are normalized into [`ClientError::Api`] with a single human-readable message.
//!
//! There is no retry, no timeout override and no connection-level state beyond the reqwest
//! pool; callers hold an [`ApiClient`] built once at startup.

use crate::error::{ClientError, Result};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// Sandbox endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.sandbox.stables.money";

/// Header carrying the per-call idempotency key on mutating requests.
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

/// Immutable process-wide settings: credential + base URL.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: Url,
}

impl ClientConfig {
    /// Build a config, falling back to [`DEFAULT_BASE_URL`] when `base_url` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the API key is empty or the base URL is not an
    /// absolute `http(s)` URL.
    pub fn new(api_key: impl Into<String>, base_url: Option<&str>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClientError::Config(
                "STABLES_API_KEY environment variable is required".to_string(),
            ));
        }

        let raw = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw)
            .map_err(|e| ClientError::Config(format!("Invalid base URL '{raw}': {e}")))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ClientError::Config(format!(
                "Invalid base URL '{raw}': unsupported scheme '{}'",
                base_url.scheme()
            )));
        }

        Ok(Self { api_key, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// Query-string pairs, in insertion order.
///
/// Only values the caller actually supplied are recorded: `None` never produces a pair, so an
/// omitted filter can't show up as `key=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.0.push((key.to_string(), v.to_string()));
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A fully shaped request: method, interpolated path, query and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if the body cannot be serialized.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::InvalidArgument(format!("Invalid request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Everything except `GET`/`HEAD` changes remote state and gets an idempotency key.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        self.method != Method::GET && self.method != Method::HEAD
    }
}

/// Characters that would let an id escape its own path segment.
const PATH_RESERVED: &[char] = &['/', '\\', '?', '#', '%'];

/// Accept a path parameter only if it stays a single opaque segment.
///
/// # Errors
///
/// Returns [`ClientError::InvalidArgument`] naming the parameter.
pub fn path_param<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidArgument(format!(
            "{name} must not be empty"
        )));
    }
    if matches!(value, "." | "..")
        || value.contains(PATH_RESERVED)
        || value.contains(char::is_control)
    {
        return Err(ClientError::InvalidArgument(format!(
            "{name} contains characters not allowed in an id: {value:?}"
        )));
    }
    Ok(value)
}

/// Fresh random key for one mutating call.
#[must_use]
pub fn new_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    config: ClientConfig,
    http: Client,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from a resolved config.
    ///
    /// The resulting instance is immutable and safe to share across tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("stables-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::from)?;
        Ok(Self {
            inner: Arc::new(ApiClientInner { config, http }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Resolve the absolute URL for a request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if the joined URL does not parse.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        build_url(self.inner.config.base_url(), &request.path, &request.query)
    }

    /// Perform one call and decode the 2xx body into `T`.
    ///
    /// An empty success body decodes as `{}`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] for any non-2xx status (message normalized from the body)
    /// - [`ClientError::Transport`] if the request could not be sent or the body read
    /// - [`ClientError::Decode`] if a 2xx body does not match `T`
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let url = self.url_for(&request)?;

        let mut builder = self
            .inner
            .http
            .request(request.method.clone(), url)
            .bearer_auth(&self.inner.config.api_key);
        if request.is_mutating() {
            builder = builder.header(IDEMPOTENCY_KEY_HEADER, new_idempotency_key());
        }
        // `json` sets `Content-Type: application/json`; bodiless requests get no content type.
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(method = %request.method, path = %request.path, "sending API request");
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = normalize_error_message(status, &bytes);
            warn!(
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                "API request failed"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            "API request succeeded"
        );
        decode_body(&bytes)
    }
}

fn build_url(base_url: &Url, path: &str, query: &QueryParams) -> Result<Url> {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    let joined = format!("{}{}", base_url.as_str().trim_end_matches('/'), path);
    let mut url = Url::parse(&joined)
        .map_err(|e| ClientError::InvalidArgument(format!("Invalid URL: {e}")))?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in query.pairs() {
            pairs.append_pair(k, v);
        }
    }

    Ok(url)
}

fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Turn a non-2xx response into one message.
///
/// Priority: `error.message`, then `message`, then a string-valued `error`; otherwise
/// `HTTP <status>: <reason>`.
#[must_use]
pub fn normalize_error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| extract_error_message(&v))
        .unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        })
}

fn extract_error_message(body: &Value) -> Option<String> {
    let non_empty = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    non_empty(body.get("error").and_then(|e| e.get("message")))
        .or_else(|| non_empty(body.get("message")))
        .or_else(|| non_empty(body.get("error")))
}
