//! Common test infrastructure
//!
//! A stub query API served by axum on a random local port. It answers every
//! `POST /api/query` with a canned reply and records what it received, so
//! tests can assert on both the rendered tool output and the outbound body.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use informix_mcp_server::core::ApiConfig;
use informix_mcp_server::domains::api::QueryClient;
use rmcp::model::CallToolResult;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-key-123";

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub api_key: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// What the stub answers with.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
    pub delay: Duration,
}

impl Reply {
    /// `{"status": "success", "data": data}` with HTTP 200.
    pub fn success(data: Value) -> Self {
        Self {
            status: 200,
            body: json!({"status": "success", "data": data}),
            delay: Duration::ZERO,
        }
    }

    /// `{"status": "error", "message": message}` with HTTP 200.
    pub fn rejected(message: &str) -> Self {
        Self {
            status: 200,
            body: json!({"status": "error", "message": message}),
            delay: Duration::ZERO,
        }
    }

    /// Non-2xx answer carrying an error envelope.
    pub fn http(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({"status": "error", "message": message}),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Standard `data` payload around one row group.
pub fn payload(query: &str, rows: Value) -> Value {
    json!({
        "queryName": query,
        "params": {},
        "results": [rows],
        "execution_time": 7,
        "connection_id": "conn-42"
    })
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

/// Stub query API instance.
///
/// When dropped, the server shuts down.
pub struct StubApi {
    /// Endpoint to configure as the query API URL.
    pub url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl StubApi {
    /// Spawn a stub answering every request with `reply`.
    pub async fn spawn(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            recorded: recorded.clone(),
        };
        let app = Router::new()
            .route("/api/query", post(handle_query))
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Stub API failed");
        });

        Self {
            url: format!("http://127.0.0.1:{port}/api/query"),
            recorded,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Everything received so far, in arrival order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().expect("recorded lock").clone()
    }

    /// Body of the only request received.
    pub fn single_body(&self) -> Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one outbound request");
        requests[0].body.clone()
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&self.url, TEST_API_KEY)
    }

    pub fn client(&self) -> QueryClient {
        QueryClient::new(&self.api_config()).expect("Failed to build client")
    }
}

async fn handle_query(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.recorded.lock().expect("recorded lock").push(Recorded {
        api_key: header("x-api-key"),
        content_type: header("content-type"),
        body,
    });

    if !state.reply.delay.is_zero() {
        tokio::time::sleep(state.reply.delay).await;
    }

    let status = StatusCode::from_u16(state.reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(state.reply.body.clone()))
}

/// URL of a local port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to get local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/query")
}

/// Concatenated text content of a tool result.
pub fn text_of(result: &CallToolResult) -> String {
    let content = serde_json::to_value(&result.content).expect("content serializes");
    content
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|c| c["text"].as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
