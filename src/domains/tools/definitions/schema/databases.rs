//! List databases tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Map;
use std::sync::Arc;
use tracing::info;

use crate::domains::api::{QueryExecutor, QueryName};
use crate::domains::tools::catalogue::query_spec;
use crate::domains::tools::common::{parse_args, run_query};
use crate::domains::tools::format;

/// `list-databases` takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListDatabasesParams {}

pub struct ListDatabasesTool;

impl ListDatabasesTool {
    pub const NAME: &'static str = "list-databases";

    pub async fn execute(executor: &dyn QueryExecutor) -> CallToolResult {
        info!("Listing databases");
        run_query(
            executor,
            Self::NAME,
            QueryName::ListDatabases,
            Map::new(),
            format::databases,
        )
        .await
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(query_spec(QueryName::ListDatabases).description.into()),
            input_schema: cached_schema_for_type::<ListDatabasesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(executor: Arc<dyn QueryExecutor>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let executor = executor.clone();
            async move {
                let _: ListDatabasesParams = parse_args(args)?;
                Ok(Self::execute(executor.as_ref()).await)
            }
            .boxed()
        })
    }
}
