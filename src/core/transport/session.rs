//! Session supervision shared by every transport.

use rmcp::{RoleServer, service::RunningService};
use std::time::Instant;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Wait for an initialized session to end and log how it ended.
pub(super) async fn supervise(
    service: RunningService<RoleServer, McpServer>,
    peer: &str,
) -> TransportResult<()> {
    let started = Instant::now();
    info!("MCP session with {} established", peer);

    let reason = service
        .waiting()
        .await
        .map_err(|e| TransportError::session(peer, e))?;

    info!(
        "MCP session with {} ended after {:.1?} ({:?})",
        peer,
        started.elapsed(),
        reason
    );
    Ok(())
}
