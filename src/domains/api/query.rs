//! Operation names understood by the remote query API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the predefined queries the remote API can run.
///
/// Serialized in camelCase, which is the exact `queryName` value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum QueryName {
    TestConnection,
    ListDatabases,
    ListTables,
    GetTableSchema,
    GetSampleData,
    GetObjectType,
    GetViewDefinition,
    ListViews,
}

impl QueryName {
    /// Every supported query, in catalogue order.
    pub const ALL: [QueryName; 8] = [
        Self::TestConnection,
        Self::ListDatabases,
        Self::ListTables,
        Self::GetTableSchema,
        Self::GetSampleData,
        Self::GetObjectType,
        Self::GetViewDefinition,
        Self::ListViews,
    ];

    /// Wire name of the query.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TestConnection => "testConnection",
            Self::ListDatabases => "listDatabases",
            Self::ListTables => "listTables",
            Self::GetTableSchema => "getTableSchema",
            Self::GetSampleData => "getSampleData",
            Self::GetObjectType => "getObjectType",
            Self::GetViewDefinition => "getViewDefinition",
            Self::ListViews => "listViews",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == name)
    }

    /// Whether the query runs against a specific database.
    pub fn takes_database(&self) -> bool {
        !matches!(self, Self::TestConnection | Self::ListDatabases)
    }
}

impl std::fmt::Display for QueryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
