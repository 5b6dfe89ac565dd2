//! Error types and handling for the MCP server.
//!
//! [`Error`] unifies the domain errors. `Config`, `Api` and `Transport` stop
//! the process at startup; `Tool` and `Resource` surface to the client as
//! MCP protocol errors through the `From<Error> for ErrorData` conversion.
//! Query failures never reach this type: they are rendered as tool results.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use super::transport::TransportError;
use crate::domains::api::ApiError;
use crate::domains::resources::ResourceError;
use crate::domains::tools::ToolError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid startup configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool arguments rejected before a query was built.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// A resource could not be resolved or rendered.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// The query API client could not be constructed.
    #[error("Query API client error: {0}")]
    Api(#[from] ApiError),

    /// The transport failed to start or its session aborted.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Tool(_) => McpError::invalid_params(message, None),
            Error::Resource(ResourceError::NotFound(_)) => {
                McpError::resource_not_found(message, None)
            }
            _ => McpError::internal_error(message, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_config_error_names_variable() {
        let err = Error::config("INFORMIX_API_KEY environment variable is required");
        assert_eq!(
            err.to_string(),
            "Configuration error: INFORMIX_API_KEY environment variable is required"
        );
    }

    #[test]
    fn test_domain_errors_convert() {
        let err: Error = ApiError::Network("no TLS backend".into()).into();
        assert!(matches!(err, Error::Api(_)));
        assert!(err.to_string().contains("no TLS backend"));

        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: Error = TransportError::bind("127.0.0.1:3000", io).into();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.to_string().starts_with("Transport error: Cannot listen on"));
    }

    #[test]
    fn test_mcp_error_codes() {
        let err: McpError = Error::from(ToolError::invalid_arguments("bad limit")).into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("bad limit"));

        let err: McpError = Error::from(ResourceError::not_found("info://nope")).into();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);

        let err: McpError = Error::config("x").into();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
