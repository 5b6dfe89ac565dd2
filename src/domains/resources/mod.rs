//! Resources domain module.
//!
//! Resources are read-only JSON documents computed on demand:
//! - `info://server` - server identity and configuration summary
//! - `info://queries` - reference for every catalogued query
//! - `info://status` - live health, probed through the query API
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{ResourceDefinition, ResourceKind};
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceEntry, ResourceService};
