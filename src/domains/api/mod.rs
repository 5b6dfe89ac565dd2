//! Query API domain module.
//!
//! Everything that talks to the remote query-execution endpoint lives here:
//! the fixed set of operation names, the `{queryName, params}` request
//! envelope, the `{status, message, data}` response envelope, and the
//! classification of transport faults into [`ApiError`].
//!
//! ## Architecture
//!
//! - `query.rs` - The closed [`QueryName`] enumeration sent on the wire
//! - `envelope.rs` - Outbound request / inbound envelope and payload narrowing
//! - `client.rs` - [`QueryExecutor`] seam and the reqwest-backed [`QueryClient`]
//! - `error.rs` - Failure classification

mod client;
mod envelope;
mod error;
mod query;

pub use client::{QueryClient, QueryExecutor};
pub use envelope::{OutboundRequest, QueryData, RemoteEnvelope, UNKNOWN_REMOTE_ERROR};
pub(crate) use envelope::field_text;
pub use error::{ApiError, ApiResult};
pub use query::QueryName;
