//! HTTP client for the remote query API.
//!
//! One `POST` per call, a fixed per-call timeout, no retries.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::envelope::{OutboundRequest, RemoteEnvelope, UNKNOWN_REMOTE_ERROR};
use super::error::{ApiError, ApiResult};
use super::query::QueryName;
use crate::core::config::ApiConfig;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Executes named queries against the remote API.
///
/// Tools and resources depend on this trait rather than on [`QueryClient`]
/// directly, so alternative backends can be plugged in.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a query with the query timeout and return the `data` payload.
    async fn execute(&self, query: QueryName, params: Map<String, Value>) -> ApiResult<Value>;

    /// Run the `testConnection` probe with the shorter probe timeout.
    async fn probe(&self) -> ApiResult<Value>;
}

/// reqwest-backed [`QueryExecutor`].
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    query_timeout: Duration,
    probe_timeout: Duration,
}

impl QueryClient {
    /// Build a client from API settings.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("informix-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
            query_timeout: config.query_timeout,
            probe_timeout: config.probe_timeout,
        })
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip_all, fields(query = %request.query_name))]
    async fn send(&self, request: &OutboundRequest, timeout: Duration) -> ApiResult<Value> {
        let params = Value::Object(request.params.clone());
        info!("Executing query {} with params {}", request.query_name, params);

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let err = ApiError::from_transport(&e, timeout);
                warn!("Query {} failed before a response: {}", request.query_name, e);
                err
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_transport(&e, timeout))?;

        debug!("API response: {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = serde_json::from_slice::<RemoteEnvelope>(&body)
                .ok()
                .and_then(|env| env.message)
                .filter(|m| !m.is_empty())
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string());
            warn!("Query {} returned HTTP {}: {}", request.query_name, status, message);
            return Err(ApiError::HttpStatus {
                code: status.as_u16(),
                message,
            });
        }

        let envelope: RemoteEnvelope = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Query {} returned an unreadable body: {}", request.query_name, e);
                RemoteEnvelope::default()
            }
        };

        envelope.into_outcome().inspect_err(|e| {
            warn!("Query {} rejected by API: {}", request.query_name, e);
        })
    }
}

#[async_trait]
impl QueryExecutor for QueryClient {
    async fn execute(&self, query: QueryName, params: Map<String, Value>) -> ApiResult<Value> {
        self.send(&OutboundRequest::new(query, params), self.query_timeout)
            .await
    }

    async fn probe(&self) -> ApiResult<Value> {
        self.send(
            &OutboundRequest::new(QueryName::TestConnection, Map::new()),
            self.probe_timeout,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_settings() {
        let mut config = ApiConfig::new("http://127.0.0.1:9/api/query", "key");
        config.probe_timeout = Duration::from_secs(3);
        let client = QueryClient::new(&config).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:9/api/query");
        assert_eq!(client.probe_timeout, Duration::from_secs(3));
        assert_eq!(client.query_timeout, Duration::from_secs(30));
    }
}
