//! Umbrella query tool.
//!
//! `query-informix` runs any catalogued query with a free-form `params`
//! object. Defaults are applied the same way the dedicated tools apply them,
//! and the whole payload is rendered without per-field interpretation.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::{ApiConfig, Config};
use crate::domains::api::{QueryExecutor, QueryName};
use crate::domains::tools::ToolError;
use crate::domains::tools::catalogue::{DEFAULT_SAMPLE_LIMIT, MAX_SAMPLE_LIMIT, query_spec};
use crate::domains::tools::common::{parse_args, rejected_input, run_query};
use crate::domains::tools::format;

/// Parameters for the umbrella query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryInformixParams {
    /// Which predefined query to run.
    #[schemars(description = "Name of the predefined query to execute")]
    pub query_name: QueryName,

    /// Query parameters (database, tableName, limit, ...).
    #[schemars(description = "Parameters for the query, e.g. {\"tableName\": \"customer\"}")]
    #[serde(default)]
    pub params: Option<Map<String, Value>>,
}

pub struct QueryInformixTool;

impl QueryInformixTool {
    pub const NAME: &'static str = "query-informix";

    pub const DESCRIPTION: &'static str = "Execute a predefined read-only Informix query by name. \
        Supported queries: testConnection, listDatabases, listTables, getTableSchema, \
        getSampleData, getObjectType, getViewDefinition, listViews. \
        Returns the full result payload including execution time and connection id.";

    /// Apply defaults and check required parameters for `query`.
    pub fn resolve_params(
        query: QueryName,
        params: Option<Map<String, Value>>,
        api: &ApiConfig,
    ) -> Result<Map<String, Value>, ToolError> {
        let mut params = params.unwrap_or_default();

        if query.takes_database() {
            let missing = match params.get("database") {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            };
            if missing {
                params.insert("database".to_string(), json!(api.default_database));
            }
        }

        if query == QueryName::GetSampleData {
            let limit = sample_limit(params.get("limit"))?;
            params.insert("limit".to_string(), json!(limit));
        }

        for required in query_spec(query).required_params() {
            match params.get(required) {
                Some(Value::String(s)) if !s.trim().is_empty() => {}
                _ => return Err(ToolError::missing(query.as_str(), required)),
            }
        }

        Ok(params)
    }

    #[instrument(skip_all, fields(query = %params.query_name))]
    pub async fn execute(
        params: QueryInformixParams,
        executor: &dyn QueryExecutor,
        api: &ApiConfig,
    ) -> CallToolResult {
        let query = params.query_name;
        let resolved = match Self::resolve_params(query, params.params, api) {
            Ok(resolved) => resolved,
            Err(e) => return rejected_input(Self::NAME, &e),
        };

        let logged = Value::Object(resolved.clone());
        info!("query-informix called: {} {}", query, logged);

        run_query(executor, Self::NAME, query, resolved, |data| {
            format::generic(data, query.as_str())
        })
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<QueryInformixParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(config: Arc<Config>, executor: Arc<dyn QueryExecutor>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            let executor = executor.clone();
            async move {
                let params: QueryInformixParams = parse_args(args)?;
                Ok(Self::execute(params, executor.as_ref(), &config.api).await)
            }
            .boxed()
        })
    }
}

/// Read a free-form `limit`, defaulting to 10 and clamping into 1..=100.
fn sample_limit(raw: Option<&Value>) -> Result<usize, ToolError> {
    let requested = match raw {
        None | Some(Value::Null) => return Ok(DEFAULT_SAMPLE_LIMIT),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
    .filter(|v| v.is_finite())
    .ok_or_else(|| ToolError::invalid_arguments("'limit' must be a number"))?;

    Ok(requested.clamp(1.0, MAX_SAMPLE_LIMIT as f64) as usize)
}
