//! Tool-specific error types.

use thiserror::Error;

/// Errors raised while validating tool input, before any query is sent.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A parameter the query cannot run without is absent or blank.
    #[error("Missing required parameter '{param}' for {query}")]
    MissingParameter { query: String, param: String },

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "missing parameter" error.
    pub fn missing(query: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingParameter {
            query: query.into(),
            param: param.into(),
        }
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
