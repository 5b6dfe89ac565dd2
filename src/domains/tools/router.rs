//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only wires the
//! shared configuration and query executor into every one of them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::api::QueryExecutor;

use super::definitions::{
    GetObjectTypeTool, GetSampleDataTool, GetTableSchemaTool, GetViewDefinitionTool,
    ListDatabasesTool, ListTablesTool, QueryInformixTool, TestConnectionTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, executor: Arc<dyn QueryExecutor>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(TestConnectionTool::create_route(executor.clone()))
        .with_route(QueryInformixTool::create_route(config.clone(), executor.clone()))
        .with_route(ListDatabasesTool::create_route(executor.clone()))
        .with_route(ListTablesTool::create_route(config.clone(), executor.clone()))
        .with_route(GetTableSchemaTool::create_route(config.clone(), executor.clone()))
        .with_route(GetSampleDataTool::create_route(config.clone(), executor.clone()))
        .with_route(GetObjectTypeTool::create_route(config.clone(), executor.clone()))
        .with_route(GetViewDefinitionTool::create_route(config, executor))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::ApiConfig;
    use crate::domains::api::QueryClient;

    struct TestServer {}

    fn test_router() -> ToolRouter<TestServer> {
        let config = Arc::new(Config::new(ApiConfig::new("http://127.0.0.1:9", "key")));
        let executor: Arc<dyn QueryExecutor> = Arc::new(QueryClient::new(&config.api).unwrap());
        build_tool_router(config, executor)
    }

    #[test]
    fn test_build_router() {
        let router = test_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 8);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"test-connection"));
        assert!(names.contains(&"query-informix"));
        assert!(names.contains(&"list-databases"));
        assert!(names.contains(&"list-tables"));
        assert!(names.contains(&"get-table-schema"));
        assert!(names.contains(&"get-sample-data"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router = test_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
