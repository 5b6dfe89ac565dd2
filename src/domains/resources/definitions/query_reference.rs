//! Query reference resource definition.
//!
//! Generated from the tool catalogue so the document always matches the
//! queries the server can actually run.

use serde_json::{Map, Value, json};

use super::{ResourceDefinition, ResourceKind};
use crate::core::config::ApiConfig;
use crate::domains::tools::catalogue::{QUERY_SPECS, QuerySpec, TIPS, WORKFLOW};
use crate::domains::tools::definitions::QueryInformixTool;

/// Query reference resource.
pub struct QueryReferenceResource;

impl ResourceDefinition for QueryReferenceResource {
    const URI: &'static str = "info://queries";
    const NAME: &'static str = "Query Reference";
    const DESCRIPTION: &'static str =
        "Every available query with parameters, examples, use cases and a suggested workflow";
    const KIND: ResourceKind = ResourceKind::QueryReference;
}

impl QueryReferenceResource {
    /// Build the document.
    pub fn document(api: &ApiConfig) -> Value {
        let queries: Vec<Value> = QUERY_SPECS.iter().map(|spec| query_entry(spec, api)).collect();

        json!({
            "tool": QueryInformixTool::NAME,
            "default_database": api.default_database,
            "queries": queries,
            "workflow": WORKFLOW,
            "tips": TIPS,
        })
    }
}

fn query_entry(spec: &QuerySpec, api: &ApiConfig) -> Value {
    let mut parameters = Map::new();
    for param in spec.params {
        let default = match param.name {
            "database" => Some(api.default_database.as_str()),
            _ => param.default,
        };
        parameters.insert(
            param.name.to_string(),
            json!({
                "type": param.kind,
                "required": param.required,
                "default": default,
                "description": param.description,
            }),
        );
    }

    let example: Value = serde_json::from_str(spec.example).unwrap_or(Value::Null);

    json!({
        "queryName": spec.query.as_str(),
        "tool": spec.tool.unwrap_or(QueryInformixTool::NAME),
        "description": spec.description,
        "parameters": parameters,
        "example": example,
        "use_case": spec.use_case,
    })
}
