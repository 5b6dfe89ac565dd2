//! Server info resource definition.
//!
//! Pure local computation: identity, configured endpoint, whether a key is
//! set (never the key itself) and the current time.

use serde_json::{Value, json};

use super::{ResourceDefinition, ResourceKind};
use crate::core::config::Config;
use crate::domains::resources::registry::resource_uris;
use crate::domains::tools::ToolRegistry;

/// Server information resource.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "info://server";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Server identity, configured query API and available tools";
    const KIND: ResourceKind = ResourceKind::ServerInfo;
}

impl ServerInfoResource {
    /// Build the document.
    pub fn document(config: &Config) -> Value {
        json!({
            "name": config.server.name,
            "version": config.server.version,
            "description": "MCP bridge for read-only Informix introspection through a remote query API",
            "transport": config.transport.description(),
            "api": {
                "url": config.api.url,
                "api_key_configured": config.api.has_api_key(),
                "default_database": config.api.default_database,
                "query_timeout_secs": config.api.query_timeout.as_secs(),
                "probe_timeout_secs": config.api.probe_timeout.as_secs(),
            },
            "tools": ToolRegistry::tool_names(),
            "resources": resource_uris(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "info://server");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_document_never_contains_key() {
        let config = Config::new(ApiConfig::new("http://api.local/query", "top-secret-key"));
        let doc = ServerInfoResource::document(&config);
        assert_eq!(doc["api"]["url"], "http://api.local/query");
        assert_eq!(doc["api"]["api_key_configured"], true);
        assert!(!doc.to_string().contains("top-secret-key"));
        assert!(doc["timestamp"].is_string());
    }
}
