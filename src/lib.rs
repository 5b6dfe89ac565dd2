//! Informix MCP Server Library
//!
//! An MCP server exposing read-only Informix introspection (databases,
//! tables, schemas, sample rows, object types, view definitions). The server
//! never talks to the database itself: every operation is forwarded as one
//! HTTP request to a remote query API that owns the connection.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP handler, shutdown and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **api**: the query API envelope, client and failure classification
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: documents that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use informix_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
