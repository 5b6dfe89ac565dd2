//! Text renderers for successful query payloads.
//!
//! Each renderer narrows only the fields it needs from the untyped rows and
//! tolerates the usual spelling variants returned by the catalog queries.

use serde_json::{Value, json};

use crate::domains::api::QueryData;
use crate::domains::api::field_text;

const DATABASE_KEYS: &[&str] = &["name", "dbname", "database", "db_name"];
const TABLE_KEYS: &[&str] = &["tabname", "name", "table_name", "tablename"];
const COLUMN_NAME_KEYS: &[&str] = &["colname", "name", "column_name"];
const COLUMN_TYPE_KEYS: &[&str] = &["coltype", "type", "data_type", "type_name"];
const COLUMN_LENGTH_KEYS: &[&str] = &["collength", "length", "size"];
const OBJECT_TYPE_KEYS: &[&str] = &["object_type", "type", "tabtype"];

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn bullets(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("• {n}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn names(data: &QueryData<'_>, keys: &[&str]) -> Vec<String> {
    data.first_rows()
        .into_iter()
        .filter_map(|row| field_text(row, keys))
        .collect()
}

/// `listDatabases`: count plus one bullet per database.
pub fn databases(data: QueryData<'_>) -> String {
    let names = names(&data, DATABASE_KEYS);
    format!("Found {} database(s):\n\n{}", names.len(), bullets(&names))
}

/// `listTables`: count plus one bullet per table.
pub fn tables(data: QueryData<'_>, database: &str) -> String {
    let names = names(&data, TABLE_KEYS);
    format!(
        "Found {} table(s) in database '{}':\n\n{}",
        names.len(),
        database,
        bullets(&names)
    )
}

/// Render one column as `name (type[(length)]) NULL|NOT NULL`.
pub fn column_line(row: &Value) -> String {
    let name = field_text(row, COLUMN_NAME_KEYS).unwrap_or_else(|| "?".to_string());
    let mut column_type = field_text(row, COLUMN_TYPE_KEYS).unwrap_or_else(|| "UNKNOWN".to_string());

    if let Some(length) = field_text(row, COLUMN_LENGTH_KEYS).filter(|l| l != "0") {
        column_type = format!("{column_type}({length})");
    }

    let nullability = if is_nullable(row) { "NULL" } else { "NOT NULL" };
    format!("{name} ({column_type}) {nullability}")
}

fn is_nullable(row: &Value) -> bool {
    match row.get("nullable").or_else(|| row.get("is_nullable")) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() != Some(0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_uppercase().as_str(),
            "Y" | "YES" | "TRUE" | "1" | "NULL"
        ),
        _ => true,
    }
}

/// `getTableSchema`: one line per column.
pub fn table_schema(data: QueryData<'_>, table: &str, database: &str) -> String {
    let columns: Vec<String> = data.first_rows().into_iter().map(column_line).collect();
    format!(
        "Schema for table '{}' in database '{}' ({} column(s)):\n\n{}",
        table,
        database,
        columns.len(),
        bullets(&columns)
    )
}

/// `getSampleData`: ordinal-prefixed pretty record per row.
pub fn sample_rows(data: QueryData<'_>, table: &str, database: &str, limit: usize) -> String {
    let rows = data.first_rows();
    let mut out = format!(
        "Sample data from '{}' in database '{}' ({} row(s), limit {}):",
        table,
        database,
        rows.len(),
        limit
    );
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!("\n\nRow {}:\n{}", i + 1, pretty(row)));
    }
    out
}

/// Expand Informix `systables.tabtype` codes.
fn object_kind(code: &str) -> &str {
    match code {
        "T" => "TABLE",
        "V" => "VIEW",
        "P" => "PRIVATE SYNONYM",
        "S" => "SYNONYM",
        "E" => "EXTERNAL TABLE",
        "Q" => "SEQUENCE",
        other => other,
    }
}

/// `getObjectType`: the resolved kind of a named object.
pub fn object_type(data: QueryData<'_>, object: &str, database: &str) -> String {
    match data.first_row().and_then(|row| field_text(row, OBJECT_TYPE_KEYS)) {
        Some(kind) => format!(
            "Object '{}' in database '{}' is a {}",
            object,
            database,
            object_kind(&kind)
        ),
        None => format!("Object '{}' was not found in database '{}'", object, database),
    }
}

/// `getViewDefinition`: the view SQL, joined across ordered fragments.
pub fn view_definition(data: QueryData<'_>, view: &str, database: &str) -> String {
    let mut fragments: Vec<(i64, String)> = data
        .first_rows()
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let text = row
                .get("viewtext")
                .or_else(|| row.get("definition"))
                .or_else(|| row.get("view_definition"))
                .and_then(Value::as_str)?;
            let seq = row.get("seqno").and_then(Value::as_i64).unwrap_or(i as i64);
            Some((seq, text.to_string()))
        })
        .collect();
    fragments.sort_by_key(|(seq, _)| *seq);

    if fragments.is_empty() {
        return format!("No definition found for view '{}' in database '{}'", view, database);
    }

    let sql: String = fragments.into_iter().map(|(_, text)| text).collect();
    format!(
        "Definition of view '{}' in database '{}':\n\n{}",
        view,
        database,
        sql.trim()
    )
}

/// `testConnection`: result row plus timing.
pub fn connection_test(data: QueryData<'_>) -> String {
    let mut out = String::from("Connection test successful!");
    if let Some(row) = data.first_row() {
        out.push_str(&format!("\n\n{}", pretty(row)));
    }
    if let Some(time) = data.execution_time() {
        out.push_str(&format!("\n\nExecution time: {time}ms"));
    }
    if let Some(id) = data.connection_id() {
        out.push_str(&format!("\nConnection ID: {id}"));
    }
    out
}

/// Whole payload without per-field interpretation (umbrella tool).
pub fn generic(data: QueryData<'_>, fallback_query: &str) -> String {
    let payload = json!({
        "queryName": data.query_name().unwrap_or(fallback_query),
        "params": data.params().cloned().unwrap_or(Value::Null),
        "results": data.results(),
        "execution_time": data.execution_time().cloned().unwrap_or(Value::Null),
        "connection_id": data.connection_id().cloned().unwrap_or(Value::Null),
    });
    format!(
        "Query '{}' executed successfully:\n\n{}",
        fallback_query,
        pretty(&payload)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(results: Value) -> Value {
        json!({
            "queryName": "x",
            "params": {},
            "results": results,
            "execution_time": 12,
            "connection_id": "conn-7"
        })
    }

    #[test]
    fn test_databases() {
        let payload = data(json!([[{"name": "sysmaster"}, {"dbname": "stores_demo"}]]));
        let text = databases(QueryData::new(&payload));
        assert!(text.starts_with("Found 2 database(s)"));
        assert!(text.contains("• sysmaster"));
        assert!(text.contains("• stores_demo"));
    }

    #[test]
    fn test_tables_empty_group() {
        let payload = data(json!([[]]));
        let text = tables(QueryData::new(&payload), "stores_demo");
        assert!(text.starts_with("Found 0 table(s) in database 'stores_demo'"));
    }

    #[test]
    fn test_column_line_variants() {
        assert_eq!(
            column_line(&json!({"colname": "fname", "coltype": "CHAR", "collength": 15, "nullable": "Y"})),
            "fname (CHAR(15)) NULL"
        );
        assert_eq!(
            column_line(&json!({"colname": "id", "coltype": "SERIAL", "nullable": false})),
            "id (SERIAL) NOT NULL"
        );
        assert_eq!(
            column_line(&json!({"name": "n", "type": "INTEGER", "length": 0, "nullable": "N"})),
            "n (INTEGER) NOT NULL"
        );
    }

    #[test]
    fn test_table_schema() {
        let payload = data(json!([[{"colname": "customer_num", "coltype": "SERIAL", "collength": 4, "nullable": "N"}]]));
        let text = table_schema(QueryData::new(&payload), "customer", "stores_demo");
        assert!(text.contains("(1 column(s))"));
        assert!(text.contains("• customer_num (SERIAL(4)) NOT NULL"));
    }

    #[test]
    fn test_sample_rows_are_numbered() {
        let payload = data(json!([[{"id": 1}, {"id": 2}]]));
        let text = sample_rows(QueryData::new(&payload), "orders", "stores_demo", 10);
        assert!(text.contains("(2 row(s), limit 10)"));
        assert!(text.contains("Row 1:\n{\n  \"id\": 1\n}"));
        assert!(text.contains("Row 2:"));
    }

    #[test]
    fn test_object_type_codes() {
        let payload = data(json!([[{"tabname": "custview", "tabtype": "V"}]]));
        let text = object_type(QueryData::new(&payload), "custview", "stores_demo");
        assert!(text.ends_with("is a VIEW"));

        let missing = data(json!([[]]));
        assert!(object_type(QueryData::new(&missing), "nope", "db").contains("not found"));
    }

    #[test]
    fn test_view_definition_orders_fragments() {
        let payload = data(json!([[
            {"seqno": 1, "viewtext": "FROM customer;"},
            {"seqno": 0, "viewtext": "CREATE VIEW custview AS SELECT * "}
        ]]));
        let text = view_definition(QueryData::new(&payload), "custview", "stores_demo");
        assert!(text.ends_with("CREATE VIEW custview AS SELECT * FROM customer;"));
    }

    #[test]
    fn test_connection_test_reports_timing() {
        let payload = data(json!([[{"current_time": "2026-10-18 10:00:00"}]]));
        let text = connection_test(QueryData::new(&payload));
        assert!(text.contains("current_time"));
        assert!(text.contains("Execution time: 12ms"));
        assert!(text.contains("conn-7"));
    }

    #[test]
    fn test_generic_includes_everything() {
        let payload = data(json!([[{"a": 1}], [{"b": 2}]]));
        let text = generic(QueryData::new(&payload), "listViews");
        assert!(text.contains("\"execution_time\": 12"));
        assert!(text.contains("\"connection_id\": \"conn-7\""));
        assert!(text.contains("\"b\": 2"));
    }
}
