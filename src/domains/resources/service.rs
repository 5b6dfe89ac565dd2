//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Documents are
//! computed on every read; nothing is cached between reads.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::definitions::{
    DatabaseStatusResource, QueryReferenceResource, ResourceKind, ServerInfoResource,
};
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;
use crate::domains::api::QueryExecutor;

/// Service for managing and accessing resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Executor used by the live status document.
    executor: Arc<dyn QueryExecutor>,

    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Which document the resource resolves to.
    pub kind: ResourceKind,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(config: Arc<Config>, executor: Arc<dyn QueryExecutor>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| {
                info!("Registering resource: {}", entry.resource.raw.uri);
                (entry.resource.raw.uri.clone(), entry)
            })
            .collect();

        Self {
            config,
            executor,
            resources,
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();
        resources.sort_by(|a, b| a.raw.uri.cmp(&b.raw.uri));
        resources
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let document = match entry.kind {
            ResourceKind::ServerInfo => ServerInfoResource::document(&self.config),
            ResourceKind::QueryReference => QueryReferenceResource::document(&self.config.api),
            ResourceKind::DatabaseStatus => {
                DatabaseStatusResource::document(self.executor.as_ref(), &self.config.api).await
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: serde_json::to_string_pretty(&document)?,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use crate::domains::api::QueryClient;

    fn service() -> ResourceService {
        // Port 9 (discard) is not expected to accept HTTP.
        let config = Arc::new(Config::new(ApiConfig::new("http://127.0.0.1:9/query", "k")));
        let executor = Arc::new(QueryClient::new(&config.api).unwrap());
        ResourceService::new(config, executor)
    }

    #[test]
    fn test_resource_service_creation() {
        let resources = tokio_test::block_on(service().list_resources());
        assert_eq!(resources.len(), 3);
        assert!(resources.iter().all(|r| r.raw.mime_type.as_deref() == Some("application/json")));
    }

    #[tokio::test]
    async fn test_read_static_resource() {
        let result = service().read_resource("info://queries").await.unwrap();
        assert_eq!(result.contents.len(), 1);
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("info://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
