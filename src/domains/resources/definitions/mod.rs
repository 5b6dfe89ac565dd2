//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and the
//! function that computes its document.

pub mod database_status;
pub mod query_reference;
pub mod server_info;

pub use database_status::DatabaseStatusResource;
pub use query_reference::QueryReferenceResource;
pub use server_info::ServerInfoResource;

/// Which document a resource URI resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ServerInfo,
    QueryReference,
    DatabaseStatus,
}

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// The document this resource resolves to.
    const KIND: ResourceKind;
}
