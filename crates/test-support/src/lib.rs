//! In-process stand-in for the Stables API, used by integration tests.
//!
//! A [`StubApi`] binds `127.0.0.1:0`, answers every request from a table of canned
//! responses keyed by `(method, path)` and records what it received. Unmatched routes get a
//! 404 in the provider's error envelope.

use anyhow::Context as _;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Decoded query pairs in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Body parsed as JSON, `None` when empty or not JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    content_type: &'static str,
}

#[derive(Default)]
struct StubState {
    routes: Mutex<HashMap<(String, String), Canned>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Running stub server; shut down when dropped.
pub struct StubApi {
    base_url: String,
    state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubApi {
    /// Bind an ephemeral localhost port and start serving.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the listener fails.
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(StubState::default());
        let app = Router::new()
            .route("/", any(handle))
            .route("/{*path}", any(handle))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind stub listener")?;
        let addr = listener.local_addr().context("stub local_addr")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        tokio::spawn(async move {
            let _ = server.await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            shutdown: Some(shutdown_tx),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.insert(method, path, status, body.to_string(), "application/json");
    }

    /// Answer `method path` with a raw body (may be empty or non-JSON).
    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.insert(method, path, status, body.to_string(), "text/plain");
    }

    fn insert(&self, method: &str, path: &str, status: u16, body: String, ct: &'static str) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.state.routes.lock().insert(
            (method.to_ascii_uppercase(), path.to_string()),
            Canned {
                status,
                body,
                content_type: ct,
            },
        );
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.state.requests.lock().len()
    }

    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().last().cloned()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect(),
        body: body.to_vec(),
    };
    state.requests.lock().push(recorded);

    let canned = state
        .routes
        .lock()
        .get(&(method.as_str().to_string(), uri.path().to_string()))
        .cloned();
    match canned {
        Some(c) => (
            c.status,
            [(axum::http::header::CONTENT_TYPE, c.content_type)],
            c.body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({
                "error": {"message": format!("no stub for {method} {}", uri.path())}
            })),
        )
            .into_response(),
    }
}
