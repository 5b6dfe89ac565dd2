//! Database status resource definition.
//!
//! Issues one `testConnection` probe with the probe timeout. Any failure,
//! including a panicking executor, is reported as `unhealthy` rather than
//! raised to the reader.

use futures::FutureExt;
use serde_json::{Value, json};
use std::panic::AssertUnwindSafe;
use tracing::{info, warn};

use super::{ResourceDefinition, ResourceKind};
use crate::core::config::ApiConfig;
use crate::domains::api::{QueryData, QueryExecutor};

/// Live database status resource.
pub struct DatabaseStatusResource;

impl ResourceDefinition for DatabaseStatusResource {
    const URI: &'static str = "info://status";
    const NAME: &'static str = "Database Status";
    const DESCRIPTION: &'static str = "Live health of the query API and database connection";
    const KIND: ResourceKind = ResourceKind::DatabaseStatus;
}

impl DatabaseStatusResource {
    /// Probe the API and build the document.
    pub async fn document(executor: &dyn QueryExecutor, api: &ApiConfig) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339();
        info!("Probing query API for status resource");

        match AssertUnwindSafe(executor.probe()).catch_unwind().await {
            Ok(Ok(data)) => {
                let data = QueryData::new(&data);
                json!({
                    "status": "healthy",
                    "timestamp": timestamp,
                    "api_url": api.url,
                    "connection": data.first_row().cloned().unwrap_or(Value::Null),
                    "execution_time": data.execution_time().cloned().unwrap_or(Value::Null),
                    "connection_id": data.connection_id().cloned().unwrap_or(Value::Null),
                })
            }
            Ok(Err(e)) => {
                warn!("Status probe failed: {}", e);
                json!({
                    "status": "unhealthy",
                    "timestamp": timestamp,
                    "api_url": api.url,
                    "error": e.to_string(),
                    "error_code": e.code(),
                })
            }
            Err(_) => {
                warn!("Status probe panicked");
                json!({
                    "status": "unhealthy",
                    "timestamp": timestamp,
                    "api_url": api.url,
                    "error": "Status probe failed unexpectedly",
                    "error_code": "INTERNAL",
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::api::{ApiError, ApiResult, QueryName};
    use async_trait::async_trait;
    use serde_json::Map;

    enum Probe {
        Healthy,
        Refused,
        Panics,
    }

    #[async_trait]
    impl QueryExecutor for Probe {
        async fn execute(&self, _query: QueryName, _params: Map<String, Value>) -> ApiResult<Value> {
            unreachable!("status resource only probes")
        }

        async fn probe(&self) -> ApiResult<Value> {
            match self {
                Self::Healthy => Ok(json!({
                    "results": [[{"connection_test": 1, "server_time": "2026-10-18 10:00:00"}]],
                    "execution_time": 4,
                    "connection_id": 17
                })),
                Self::Refused => Err(ApiError::ConnectionRefused),
                Self::Panics => panic!("probe exploded"),
            }
        }
    }

    fn api() -> ApiConfig {
        ApiConfig::new("http://api.local/query", "k")
    }

    #[tokio::test]
    async fn test_healthy_probe() {
        let doc = DatabaseStatusResource::document(&Probe::Healthy, &api()).await;
        assert_eq!(doc["status"], "healthy");
        assert_eq!(doc["connection"]["connection_test"], 1);
        assert_eq!(doc["connection_id"], 17);
    }

    #[tokio::test]
    async fn test_failed_probe() {
        let doc = DatabaseStatusResource::document(&Probe::Refused, &api()).await;
        assert_eq!(doc["status"], "unhealthy");
        assert_eq!(doc["error_code"], "CONNECTION_REFUSED");
    }

    #[tokio::test]
    async fn test_panicking_probe_is_unhealthy() {
        let doc = DatabaseStatusResource::document(&Probe::Panics, &api()).await;
        assert_eq!(doc["status"], "unhealthy");
    }
}
