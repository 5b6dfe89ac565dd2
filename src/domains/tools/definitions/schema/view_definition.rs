//! View definition tool.
//!
//! Informix stores long view text split across `sysviews` rows; the
//! fragments are reassembled in `seqno` order before rendering.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::core::config::{ApiConfig, Config};
use crate::domains::api::{QueryExecutor, QueryName};
use crate::domains::tools::catalogue::query_spec;
use crate::domains::tools::common::{
    params_from, parse_args, rejected_input, require_name, resolve_database, run_query,
};
use crate::domains::tools::format;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetViewDefinitionParams {
    #[schemars(description = "Name of the view")]
    pub view_name: String,

    #[schemars(description = "Database name (defaults to the configured default database)")]
    #[serde(default)]
    pub database: Option<String>,
}

pub struct GetViewDefinitionTool;

impl GetViewDefinitionTool {
    pub const NAME: &'static str = "get-view-definition";

    pub async fn execute(
        params: GetViewDefinitionParams,
        executor: &dyn QueryExecutor,
        api: &ApiConfig,
    ) -> CallToolResult {
        let view = match require_name(QueryName::GetViewDefinition, "viewName", &params.view_name) {
            Ok(view) => view,
            Err(e) => return rejected_input(Self::NAME, &e),
        };
        let database = resolve_database(params.database.as_deref(), &api.default_database);
        info!("Getting definition of view {}.{}", database, view);

        let query_params = params_from([
            ("viewName", Some(json!(view))),
            ("database", Some(json!(database))),
        ]);
        run_query(executor, Self::NAME, QueryName::GetViewDefinition, query_params, |data| {
            format::view_definition(data, &view, &database)
        })
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(query_spec(QueryName::GetViewDefinition).description.into()),
            input_schema: cached_schema_for_type::<GetViewDefinitionParams>(),
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
                let params: GetViewDefinitionParams = parse_args(args)?;
                Ok(Self::execute(params, executor.as_ref(), &config.api).await)
            }
            .boxed()
        })
    }
}
