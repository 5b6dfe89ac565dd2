//! MCP over the process's own stdin/stdout.
//!
//! stdout carries protocol frames only; logging goes to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult, session};
use crate::core::McpServer;

const PEER: &str = "stdio client";

/// Serve a single session until the client closes stdin.
pub async fn run(server: McpServer) -> TransportResult<()> {
    info!("Waiting for an MCP client on stdin");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::handshake(PEER, e))?;

    session::supervise(service, PEER).await
}
