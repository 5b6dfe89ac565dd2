//! Connection test tool.
//!
//! Sends the `testConnection` query and reports the row the API returns.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::api::{QueryExecutor, QueryName};
use crate::domains::tools::catalogue::query_spec;
use crate::domains::tools::common::{params_from, parse_args, run_query};
use crate::domains::tools::format;

/// Parameters for the connection test.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TestConnectionParams {
    /// Optional message echoed back by the API.
    #[schemars(description = "Optional message echoed back with the test result")]
    #[serde(default)]
    pub message: Option<String>,
}

/// Connection test tool.
pub struct TestConnectionTool;

impl TestConnectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "test-connection";

    /// Execute the connection test.
    #[instrument(skip_all)]
    pub async fn execute(params: TestConnectionParams, executor: &dyn QueryExecutor) -> CallToolResult {
        info!("Testing connection to the query API");
        let params = params_from([("message", params.message.map(Value::String))]);
        run_query(
            executor,
            Self::NAME,
            QueryName::TestConnection,
            params,
            format::connection_test,
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(query_spec(QueryName::TestConnection).description.into()),
            input_schema: cached_schema_for_type::<TestConnectionParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(executor: Arc<dyn QueryExecutor>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let executor = executor.clone();
            async move {
                let params: TestConnectionParams = parse_args(args)?;
                Ok(Self::execute(params, executor.as_ref()).await)
            }
            .boxed()
        })
    }
}
