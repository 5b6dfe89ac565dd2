//! Schema introspection tools.
//!
//! - `databases`: list databases on the server
//! - `tables`: list tables of a database
//! - `table_schema`: column definitions of a table
//! - `object_type`: resolve what kind of object a name is
//! - `view_definition`: SQL text of a view

pub mod databases;
pub mod object_type;
pub mod table_schema;
pub mod tables;
pub mod view_definition;

pub use databases::{ListDatabasesParams, ListDatabasesTool};
pub use object_type::{GetObjectTypeParams, GetObjectTypeTool};
pub use table_schema::{GetTableSchemaParams, GetTableSchemaTool};
pub use tables::{ListTablesParams, ListTablesTool};
pub use view_definition::{GetViewDefinitionParams, GetViewDefinitionTool};
