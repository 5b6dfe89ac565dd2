//! Query API failure classification.

use std::time::Duration;
use thiserror::Error;

/// Result type for query API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a query did not produce data.
///
/// Every failure is terminal for the call; nothing here is retried.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The API answered but reported a non-success status.
    #[error("{0}")]
    RemoteRejected(String),

    /// The API answered with a non-2xx HTTP status.
    #[error("{}", describe_status(.code, .message))]
    HttpStatus { code: u16, message: String },

    /// The API host could not be reached.
    #[error("Connection refused - the query API target is unreachable")]
    ConnectionRefused,

    /// No response arrived within the call's bound.
    #[error("Request timed out - no response within {0:?}")]
    Timeout(Duration),

    /// Any other transport fault.
    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Stable label for the classification.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RemoteRejected(_) => "REMOTE_REJECTED",
            Self::HttpStatus { .. } => "HTTP_STATUS",
            Self::ConnectionRefused => "CONNECTION_REFUSED",
            Self::Timeout(_) => "TIMEOUT",
            Self::Network(_) => "NETWORK_ERROR",
        }
    }

    /// Classify a reqwest failure that happened before a status was read.
    pub(crate) fn from_transport(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::ConnectionRefused
        } else {
            Self::Network(err.to_string())
        }
    }
}

fn describe_status(code: &u16, message: &str) -> String {
    match code {
        401 => "Authentication failed - check the configured API key".to_string(),
        403 => "Access forbidden - the API key lacks permission for this query".to_string(),
        400 => format!("Bad request: {message}"),
        500 => format!("Server error: {message}"),
        other => format!("HTTP {other}: {message}"),
    }
}
