//! Operation catalogue.
//!
//! One entry per [`QueryName`]: description, parameter shapes, an example
//! invocation and a use case. Dedicated tools take their descriptions from
//! here and the `info://queries` document is generated from the same table.

use crate::domains::api::QueryName;

/// Shape of one query parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub description: &'static str,
}

/// Catalogue entry for one query.
#[derive(Debug, Clone, Copy)]
pub struct QuerySpec {
    pub query: QueryName,
    /// Dedicated tool exposing the query, if any.
    pub tool: Option<&'static str>,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    /// Example `query-informix` arguments, as JSON.
    pub example: &'static str,
    pub use_case: &'static str,
}

impl QuerySpec {
    /// Names of parameters the query cannot run without.
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }
}

/// Default number of sampled rows.
pub const DEFAULT_SAMPLE_LIMIT: usize = 10;

/// Sampled rows are silently capped at this many.
pub const MAX_SAMPLE_LIMIT: usize = 100;

const DATABASE: ParamSpec = ParamSpec {
    name: "database",
    kind: "string",
    required: false,
    default: Some("sysmaster"),
    description: "Database to inspect",
};

const TABLE_NAME: ParamSpec = ParamSpec {
    name: "tableName",
    kind: "string",
    required: true,
    default: None,
    description: "Name of the table",
};

pub static QUERY_SPECS: [QuerySpec; 8] = [
    QuerySpec {
        query: QueryName::TestConnection,
        tool: Some("test-connection"),
        description: "Test connectivity to the Informix database through the query API",
        params: &[ParamSpec {
            name: "message",
            kind: "string",
            required: false,
            default: None,
            description: "Optional message echoed back with the test result",
        }],
        example: r#"{"queryName": "testConnection", "params": {}}"#,
        use_case: "Verify the API and database are reachable before running other queries.",
    },
    QuerySpec {
        query: QueryName::ListDatabases,
        tool: Some("list-databases"),
        description: "List all databases available on the Informix server",
        params: &[],
        example: r#"{"queryName": "listDatabases", "params": {}}"#,
        use_case: "Discover which databases exist before exploring one of them.",
    },
    QuerySpec {
        query: QueryName::ListTables,
        tool: Some("list-tables"),
        description: "List the user tables of a database",
        params: &[DATABASE],
        example: r#"{"queryName": "listTables", "params": {"database": "stores_demo"}}"#,
        use_case: "Get an overview of the tables in a database.",
    },
    QuerySpec {
        query: QueryName::GetTableSchema,
        tool: Some("get-table-schema"),
        description: "Get the column definitions of a table (name, type, length, nullability)",
        params: &[TABLE_NAME, DATABASE],
        example: r#"{"queryName": "getTableSchema", "params": {"tableName": "customer", "database": "stores_demo"}}"#,
        use_case: "Understand a table's structure before querying its data.",
    },
    QuerySpec {
        query: QueryName::GetSampleData,
        tool: Some("get-sample-data"),
        description: "Get a sample of rows from a table (default 10, max 100)",
        params: &[
            TABLE_NAME,
            DATABASE,
            ParamSpec {
                name: "limit",
                kind: "number",
                required: false,
                default: Some("10"),
                description: "Number of rows to return, capped at 100",
            },
        ],
        example: r#"{"queryName": "getSampleData", "params": {"tableName": "customer", "limit": 5}}"#,
        use_case: "See what real rows look like to understand the data in a table.",
    },
    QuerySpec {
        query: QueryName::GetObjectType,
        tool: Some("get-object-type"),
        description: "Resolve whether a database object is a table, view, synonym or other kind",
        params: &[
            ParamSpec {
                name: "objectName",
                kind: "string",
                required: true,
                default: None,
                description: "Name of the database object",
            },
            DATABASE,
        ],
        example: r#"{"queryName": "getObjectType", "params": {"objectName": "custview"}}"#,
        use_case: "Find out what kind of object a name refers to before inspecting it.",
    },
    QuerySpec {
        query: QueryName::GetViewDefinition,
        tool: Some("get-view-definition"),
        description: "Get the SQL definition of a view",
        params: &[
            ParamSpec {
                name: "viewName",
                kind: "string",
                required: true,
                default: None,
                description: "Name of the view",
            },
            DATABASE,
        ],
        example: r#"{"queryName": "getViewDefinition", "params": {"viewName": "custview"}}"#,
        use_case: "Read how a view is built from its underlying tables.",
    },
    QuerySpec {
        query: QueryName::ListViews,
        tool: None,
        description: "List the views defined in a database",
        params: &[DATABASE],
        example: r#"{"queryName": "listViews", "params": {"database": "stores_demo"}}"#,
        use_case: "Discover views alongside tables when mapping a database.",
    },
];

/// Suggested order for exploring an unfamiliar server.
pub const WORKFLOW: [&str; 5] = [
    "Run test-connection to confirm the API and database are reachable",
    "Run list-databases to see what is available",
    "Run list-tables on the database of interest",
    "Run get-table-schema on interesting tables",
    "Run get-sample-data to look at actual rows",
];

/// Usage tips for clients.
pub const TIPS: [&str; 5] = [
    "When database is omitted the default database is used",
    "Sample data is capped at 100 rows; larger limits are reduced silently",
    "Use get-object-type when unsure whether a name is a table or a view",
    "All queries are read-only; nothing can modify the database",
    "query-informix accepts any queryName listed here with a free-form params object",
];

/// Catalogue entry for a query.
pub fn query_spec(query: QueryName) -> &'static QuerySpec {
    QUERY_SPECS
        .iter()
        .find(|spec| spec.query == query)
        .unwrap_or(&QUERY_SPECS[0])
}

/// Catalogue entry behind a dedicated tool name.
pub fn spec_for_tool(tool: &str) -> Option<&'static QuerySpec> {
    QUERY_SPECS.iter().find(|spec| spec.tool == Some(tool))
}
