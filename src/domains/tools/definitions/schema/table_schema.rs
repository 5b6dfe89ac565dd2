//! Table schema tool.
//!
//! Renders one line per column: `name (type[(length)]) NULL|NOT NULL`.

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
use crate::domains::tools::common::{
    params_from, parse_args, rejected_input, require_name, resolve_database, run_query,
};
use crate::domains::tools::format;

/// Parameters for the table schema lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTableSchemaParams {
    /// Table to describe.
    #[schemars(description = "Name of the table")]
    pub table_name: String,

    #[schemars(description = "Database name (defaults to the configured default database)")]
    #[serde(default)]
    pub database: Option<String>,
}

pub struct GetTableSchemaTool;

impl GetTableSchemaTool {
    pub const NAME: &'static str = "get-table-schema";

    #[instrument(skip_all, fields(table = %params.table_name))]
    pub async fn execute(
        params: GetTableSchemaParams,
        executor: &dyn QueryExecutor,
        api: &ApiConfig,
    ) -> CallToolResult {
        let table = match require_name(QueryName::GetTableSchema, "tableName", &params.table_name) {
            Ok(table) => table,
            Err(e) => return rejected_input(Self::NAME, &e),
        };
        let database = resolve_database(params.database.as_deref(), &api.default_database);
        info!("Getting schema for {}.{}", database, table);

        let query_params = params_from([
            ("tableName", Some(json!(table))),
            ("database", Some(json!(database))),
        ]);
        run_query(executor, Self::NAME, QueryName::GetTableSchema, query_params, |data| {
            format::table_schema(data, &table, &database)
        })
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(query_spec(QueryName::GetTableSchema).description.into()),
            input_schema: cached_schema_for_type::<GetTableSchemaParams>(),
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
                let params: GetTableSchemaParams = parse_args(args)?;
                Ok(Self::execute(params, executor.as_ref(), &config.api).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_is_required() {
        let err = serde_json::from_str::<GetTableSchemaParams>(r#"{"database": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("tableName"));
    }

    #[test]
    fn test_camel_case_params() {
        let params: GetTableSchemaParams =
            serde_json::from_str(r#"{"tableName": "customer"}"#).unwrap();
        assert_eq!(params.table_name, "customer");
        assert!(params.database.is_none());
    }
}
