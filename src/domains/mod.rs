//! Domains module containing business logic organized by bounded contexts.
//!
//! - **api**: the remote query API envelope, client and failure classification
//! - **tools**: the introspection tools MCP clients call
//! - **resources**: the documents MCP clients read

pub mod api;
pub mod resources;
pub mod tools;
