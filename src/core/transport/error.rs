//! Transport failures.
//!
//! Each variant names the peer so a log line is enough to tell which client
//! session went wrong.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be opened.
    #[error("Cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP initialize exchange did not complete.
    #[error("MCP handshake with {peer} failed: {reason}")]
    Handshake { peer: String, reason: String },

    /// A running session terminated abnormally.
    #[error("MCP session with {peer} aborted: {reason}")]
    Session { peer: String, reason: String },
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(peer: impl Into<String>, reason: impl ToString) -> Self {
        Self::Handshake {
            peer: peer.into(),
            reason: reason.to_string(),
        }
    }

    pub fn session(peer: impl Into<String>, reason: impl ToString) -> Self {
        Self::Session {
            peer: peer.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_peer() {
        let err = TransportError::handshake("stdio client", "connection closed: initialize request");
        assert_eq!(
            err.to_string(),
            "MCP handshake with stdio client failed: connection closed: initialize request"
        );

        let err = TransportError::session("127.0.0.1:4242", "task panicked");
        assert!(err.to_string().contains("127.0.0.1:4242"));
    }

    #[test]
    fn test_bind_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = TransportError::bind("127.0.0.1:3000", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Cannot listen on 127.0.0.1:3000"));
    }
}
