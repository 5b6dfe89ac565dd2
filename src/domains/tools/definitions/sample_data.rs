//! Sample data tool.
//!
//! Fetches up to `limit` rows from a table. The limit defaults to 10 and is
//! reduced to 100 when a larger value is requested; it is never rejected.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::core::config::{ApiConfig, Config};
use crate::domains::api::{QueryExecutor, QueryName};
use crate::domains::tools::catalogue::query_spec;
use crate::domains::tools::common::{
    default_limit, params_from, parse_args, rejected_input, require_name, resolve_database,
    run_query, validate_limit,
};
use crate::domains::tools::format;

/// Parameters for sampling rows.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSampleDataParams {
    #[schemars(description = "Name of the table")]
    pub table_name: String,

    #[schemars(description = "Database name (defaults to the configured default database)")]
    #[serde(default)]
    pub database: Option<String>,

    /// Maximum number of rows to return (default: 10, max: 100).
    #[schemars(description = "Maximum number of rows (default: 10, max: 100)")]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

pub struct GetSampleDataTool;

impl GetSampleDataTool {
    pub const NAME: &'static str = "get-sample-data";

    #[instrument(skip_all, fields(table = %params.table_name, limit = params.limit))]
    pub async fn execute(
        params: GetSampleDataParams,
        executor: &dyn QueryExecutor,
        api: &ApiConfig,
    ) -> CallToolResult {
        let table = match require_name(QueryName::GetSampleData, "tableName", &params.table_name) {
            Ok(table) => table,
            Err(e) => return rejected_input(Self::NAME, &e),
        };
        let database = resolve_database(params.database.as_deref(), &api.default_database);
        let limit = validate_limit(params.limit);
        if limit != params.limit {
            debug!("Sample limit {} adjusted to {}", params.limit, limit);
        }
        info!("Getting {} sample row(s) from {}.{}", limit, database, table);

        let query_params = params_from([
            ("tableName", Some(json!(table))),
            ("database", Some(json!(database))),
            ("limit", Some(json!(limit))),
        ]);
        run_query(executor, Self::NAME, QueryName::GetSampleData, query_params, |data| {
            format::sample_rows(data, &table, &database, limit)
        })
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(query_spec(QueryName::GetSampleData).description.into()),
            input_schema: cached_schema_for_type::<GetSampleDataParams>(),
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
                let params: GetSampleDataParams = parse_args(args)?;
                Ok(Self::execute(params, executor.as_ref(), &config.api).await)
            }
            .boxed()
        })
    }
}
