//! Common utilities shared across tools.
//!
//! Parameter defaulting, result construction and the single dispatch path
//! every tool goes through: resolve params, call the executor, format the
//! outcome.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use super::ToolError;
use super::catalogue::{DEFAULT_SAMPLE_LIMIT, MAX_SAMPLE_LIMIT};
use crate::core::Error;
use crate::domains::api::{ApiError, QueryData, QueryExecutor, QueryName};

/// Default limit for sampled rows.
pub fn default_limit() -> usize {
    DEFAULT_SAMPLE_LIMIT
}

/// Clamp a requested sample size to 1..=100.
pub fn validate_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_SAMPLE_LIMIT)
}

/// Use the requested database, or the configured default when absent/blank.
pub fn resolve_database(requested: Option<&str>, default_database: &str) -> String {
    requested
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(default_database)
        .to_string()
}

/// Deserialize tool arguments, rejecting malformed input as invalid params.
pub fn parse_args<P: DeserializeOwned>(args: Map<String, Value>) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| Error::from(ToolError::invalid_arguments(e.to_string())).into())
}

/// Trimmed value of a required name; blank counts as missing.
pub fn require_name(query: QueryName, param: &str, value: &str) -> Result<String, ToolError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ToolError::missing(query.as_str(), param));
    }
    Ok(value.to_string())
}

/// Error result for input rejected before any query is sent.
pub fn rejected_input(tool: &str, err: &ToolError) -> CallToolResult {
    error_result(&format!("Error executing {tool}: {err}"))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Body returned when a query fails.
pub fn failure_text(tool: &str, query: QueryName, params: &Map<String, Value>, err: &ApiError) -> String {
    let params = serde_json::to_string_pretty(params).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Error executing {tool}: {err}\n\n\
         Classification: {code}\n\
         Query: {query}\n\
         Parameters: {params}",
        code = err.code(),
    )
}

/// Run one query and render its outcome.
///
/// `format` sees the `data` payload only on success; failures become an
/// error-flagged result echoing the query and parameters.
pub async fn run_query<F>(
    executor: &dyn QueryExecutor,
    tool: &str,
    query: QueryName,
    params: Map<String, Value>,
    format: F,
) -> CallToolResult
where
    F: FnOnce(QueryData<'_>) -> String,
{
    match executor.execute(query, params.clone()).await {
        Ok(data) => success_result(format(QueryData::new(&data))),
        Err(err) => error_result(&failure_text(tool, query, &params, &err)),
    }
}

/// Build a parameter map from name/value pairs, skipping `None`s.
pub fn params_from<I>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'static str, Option<Value>)>,
{
    pairs
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(10), 10);
        assert_eq!(validate_limit(0), 1);
        assert_eq!(validate_limit(500), 100);
        assert_eq!(validate_limit(100), 100);
    }

    #[test]
    fn test_resolve_database() {
        assert_eq!(resolve_database(None, "sysmaster"), "sysmaster");
        assert_eq!(resolve_database(Some("  "), "sysmaster"), "sysmaster");
        assert_eq!(resolve_database(Some("stores_demo"), "sysmaster"), "stores_demo");
    }

    #[test]
    fn test_parse_args_rejects_wrong_shape() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Args {
            limit: usize,
        }

        let args = json!({"limit": "ten"}).as_object().cloned().unwrap();
        let err = parse_args::<Args>(args).unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.starts_with("Tool error: Invalid arguments"));
    }

    #[test]
    fn test_require_name() {
        assert_eq!(
            require_name(QueryName::GetTableSchema, "tableName", " customer ").unwrap(),
            "customer"
        );
        let err = require_name(QueryName::GetViewDefinition, "viewName", "  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'viewName' for getViewDefinition"
        );
    }

    #[test]
    fn test_failure_text_echoes_context() {
        let params = params_from([("tableName", Some(json!("orders"))), ("database", None)]);
        let text = failure_text(
            "get-table-schema",
            QueryName::GetTableSchema,
            &params,
            &ApiError::RemoteRejected("no such table".into()),
        );
        assert!(text.contains("no such table"));
        assert!(text.contains("REMOTE_REJECTED"));
        assert!(text.contains("getTableSchema"));
        assert!(text.contains("\"tableName\": \"orders\""));
        assert!(!text.contains("database"));
    }
}
