//! MCP over raw TCP, one session per accepted connection.
//!
//! Sessions share the same immutable server state and run independently;
//! a failing session is logged and never stops the listener.

use rmcp::ServiceExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TcpConfig, TransportError, TransportResult, session};
use crate::core::McpServer;

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub struct TcpTransport {
    config: TcpConfig,
    active: Arc<AtomicUsize>,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self {
            config,
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// `host:port` the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Number of sessions currently open.
    pub fn active_sessions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Accept clients until the process stops. Only a bind failure returns.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let address = self.address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| TransportError::bind(&address, e))?;

        info!("Accepting MCP clients on {}", address);

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Accept failed on {}: {}", address, e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Could not disable Nagle for {}: {}", peer, e);
            }

            let server = server.clone();
            let active = self.active.clone();
            tokio::spawn(async move {
                let open = active.fetch_add(1, Ordering::SeqCst) + 1;
                info!("Client {} connected ({} open)", peer, open);

                if let Err(e) = serve_client(server, stream, &peer.to_string()).await {
                    warn!("{}", e);
                }

                active.fetch_sub(1, Ordering::SeqCst);
            });
        }
    }
}

async fn serve_client(server: McpServer, stream: TcpStream, peer: &str) -> TransportResult<()> {
    let service = server
        .serve(stream)
        .await
        .map_err(|e| TransportError::handshake(peer, e))?;
    session::supervise(service, peer).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ApiConfig, Config};

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let transport = TcpTransport::new(TcpConfig {
            port,
            host: "127.0.0.1".to_string(),
        });
        assert_eq!(transport.address(), format!("127.0.0.1:{port}"));
        assert_eq!(transport.active_sessions(), 0);

        let server =
            McpServer::new(Config::new(ApiConfig::new("http://127.0.0.1:9/query", "k"))).unwrap();
        let err = transport.run(server).await.unwrap_err();
        assert!(matches!(err, TransportError::Bind { .. }));
    }
}
