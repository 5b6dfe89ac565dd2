//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod connection;
pub mod query;
pub mod sample_data;
pub mod schema;

pub use connection::{TestConnectionParams, TestConnectionTool};
pub use query::{QueryInformixParams, QueryInformixTool};
pub use sample_data::{GetSampleDataParams, GetSampleDataTool};
pub use schema::{
    GetObjectTypeParams, GetObjectTypeTool, GetTableSchemaParams, GetTableSchemaTool,
    GetViewDefinitionParams, GetViewDefinitionTool, ListDatabasesParams, ListDatabasesTool,
    ListTablesParams, ListTablesTool,
};
