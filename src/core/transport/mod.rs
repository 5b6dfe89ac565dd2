//! Transports carrying MCP sessions.
//!
//! - **stdio** (feature `stdio`, default): one session over stdin/stdout
//! - **tcp** (feature `tcp`): one session per accepted connection
//!
//! Transports own framing and session lifetime only. Every request reaches
//! [`McpServer`] unchanged.

mod config;
mod error;
mod session;

#[cfg(feature = "stdio")]
pub mod stdio;

#[cfg(feature = "tcp")]
pub mod tcp;

use tracing::info;

use crate::core::McpServer;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

/// Runs the configured transport for a server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve until the session ends (stdio) or the listener fails (tcp).
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            "Serving {} v{} over {}",
            server.name(),
            server.version(),
            self.config.description()
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => stdio::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => tcp::TcpTransport::new(cfg).run(server).await,
        }
    }
}
