//! Tools domain module.
//!
//! Tools are the read-only introspection operations MCP clients can call.
//! Every tool resolves its parameters, sends exactly one query through a
//! [`QueryExecutor`](crate::domains::api::QueryExecutor) and renders the
//! outcome as text. Query failures come back as error-flagged results, never
//! as protocol faults.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `catalogue.rs` - Per-query descriptions, parameter shapes and examples
//! - `common.rs` - Defaulting, clamping and the shared dispatch path
//! - `format.rs` - Text renderers for successful payloads
//! - `router.rs` - Dynamic ToolRouter builder
//! - `registry.rs` - Tool metadata listing
//! - `error.rs` - Input validation errors

pub mod catalogue;
pub mod common;
pub mod definitions;
mod error;
pub mod format;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
