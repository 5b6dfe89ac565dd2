//! Tool Registry - metadata for every registered tool.
//!
//! Used for listings outside the rmcp router (the `info://server`
//! document) and to keep the router and the query catalogue in step.

use rmcp::model::Tool;

use super::catalogue::QUERY_SPECS;
use super::definitions::{
    GetObjectTypeTool, GetSampleDataTool, GetTableSchemaTool, GetViewDefinitionTool,
    ListDatabasesTool, ListTablesTool, QueryInformixTool, TestConnectionTool,
};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            TestConnectionTool::NAME,
            QueryInformixTool::NAME,
            ListDatabasesTool::NAME,
            ListTablesTool::NAME,
            GetTableSchemaTool::NAME,
            GetSampleDataTool::NAME,
            GetObjectTypeTool::NAME,
            GetViewDefinitionTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            TestConnectionTool::to_tool(),
            QueryInformixTool::to_tool(),
            ListDatabasesTool::to_tool(),
            ListTablesTool::to_tool(),
            GetTableSchemaTool::to_tool(),
            GetSampleDataTool::to_tool(),
            GetObjectTypeTool::to_tool(),
            GetViewDefinitionTool::to_tool(),
        ]
    }

    /// Names of tools dedicated to a single catalogued query.
    pub fn dedicated_tool_names() -> Vec<&'static str> {
        QUERY_SPECS.iter().filter_map(|spec| spec.tool).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"get-object-type"));
        assert!(names.contains(&"get-view-definition"));
    }

    #[test]
    fn test_catalogue_tools_are_registered() {
        let names = ToolRegistry::tool_names();
        for tool in ToolRegistry::dedicated_tool_names() {
            assert!(names.contains(&tool), "{tool} is catalogued but not registered");
        }
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some_and(|d| !d.is_empty()));
        }
    }
}
