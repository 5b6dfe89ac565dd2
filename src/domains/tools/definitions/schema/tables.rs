//! List tables tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::{ApiConfig, Config};
use crate::domains::api::{QueryExecutor, QueryName};
use crate::domains::tools::catalogue::query_spec;
use crate::domains::tools::common::{params_from, parse_args, resolve_database, run_query};
use crate::domains::tools::format;

/// Parameters for listing tables.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTablesParams {
    /// Database to list tables from.
    #[schemars(description = "Database name (defaults to the configured default database)")]
    #[serde(default)]
    pub database: Option<String>,
}

pub struct ListTablesTool;

impl ListTablesTool {
    pub const NAME: &'static str = "list-tables";

    #[instrument(skip_all, fields(database = ?params.database))]
    pub async fn execute(
        params: ListTablesParams,
        executor: &dyn QueryExecutor,
        api: &ApiConfig,
    ) -> CallToolResult {
        let database = resolve_database(params.database.as_deref(), &api.default_database);
        info!("Listing tables in database {}", database);

        let query_params = params_from([("database", Some(json!(database)))]);
        run_query(executor, Self::NAME, QueryName::ListTables, query_params, |data| {
            format::tables(data, &database)
        })
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(query_spec(QueryName::ListTables).description.into()),
            input_schema: cached_schema_for_type::<ListTablesParams>(),
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
                let params: ListTablesParams = parse_args(args)?;
                Ok(Self::execute(params, executor.as_ref(), &config.api).await)
            }
            .boxed()
        })
    }
}
