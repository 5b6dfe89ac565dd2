//! Request and response envelopes for the query API.
//!
//! The response `data` is kept as an untyped [`Value`]; [`QueryData`] offers
//! lenient accessors so each formatter narrows only the fields it needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ApiError;
use super::query::QueryName;

/// Message used when the remote rejects a query without saying why.
pub const UNKNOWN_REMOTE_ERROR: &str = "Unknown error from API";

/// Body of `POST <api url>`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundRequest {
    pub query_name: QueryName,
    pub params: Map<String, Value>,
}

impl OutboundRequest {
    pub fn new(query_name: QueryName, params: Map<String, Value>) -> Self {
        Self { query_name, params }
    }
}

/// Envelope returned by the query API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RemoteEnvelope {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Split into the pass-through `data` or a rejection.
    pub fn into_outcome(self) -> Result<Value, ApiError> {
        if self.is_success() {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(ApiError::RemoteRejected(
                self.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string()),
            ))
        }
    }
}

/// Read-only view over a successful `data` payload.
#[derive(Debug, Clone, Copy)]
pub struct QueryData<'a>(pub &'a Value);

impl<'a> QueryData<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self(data)
    }

    /// The full `results` sequence (empty if absent).
    pub fn results(&self) -> &'a [Value] {
        self.0
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Rows of the first result group.
    ///
    /// An array group yields its elements, a lone object is a one-row group,
    /// anything else yields no rows.
    pub fn first_rows(&self) -> Vec<&'a Value> {
        match self.results().first() {
            Some(Value::Array(rows)) => rows.iter().collect(),
            Some(row @ Value::Object(_)) => vec![row],
            _ => Vec::new(),
        }
    }

    /// First row of the first result group.
    pub fn first_row(&self) -> Option<&'a Value> {
        self.first_rows().into_iter().next()
    }

    pub fn execution_time(&self) -> Option<&'a Value> {
        self.0.get("execution_time")
    }

    pub fn connection_id(&self) -> Option<&'a Value> {
        self.0.get("connection_id")
    }

    pub fn query_name(&self) -> Option<&'a str> {
        self.0.get("queryName").and_then(Value::as_str)
    }

    pub fn params(&self) -> Option<&'a Value> {
        self.0.get("params")
    }
}

/// First non-empty string-ish field among `keys`.
pub(crate) fn field_text(row: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match row.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outbound_body_shape() {
        let mut params = Map::new();
        params.insert("database".into(), json!("stores_demo"));
        let body = serde_json::to_value(OutboundRequest::new(QueryName::ListTables, params)).unwrap();
        assert_eq!(
            body,
            json!({"queryName": "listTables", "params": {"database": "stores_demo"}})
        );
    }

    #[test]
    fn test_success_envelope_passes_data_through() {
        let envelope: RemoteEnvelope =
            serde_json::from_value(json!({"status": "success", "data": {"anything": [1, 2]}}))
                .unwrap();
        assert_eq!(envelope.into_outcome().unwrap(), json!({"anything": [1, 2]}));
    }

    #[test]
    fn test_failure_envelope_uses_remote_message() {
        let envelope: RemoteEnvelope =
            serde_json::from_value(json!({"status": "failure", "message": "table not found"}))
                .unwrap();
        let err = envelope.into_outcome().unwrap_err();
        assert!(matches!(err, ApiError::RemoteRejected(ref m) if m == "table not found"));
    }

    #[test]
    fn test_failure_envelope_without_message() {
        let envelope: RemoteEnvelope = serde_json::from_value(json!({"status": "error"})).unwrap();
        let err = envelope.into_outcome().unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_REMOTE_ERROR);
    }

    #[test]
    fn test_first_rows_variants() {
        let grouped = json!({"results": [[{"name": "a"}, {"name": "b"}], [{"name": "c"}]]});
        assert_eq!(QueryData::new(&grouped).first_rows().len(), 2);

        let single = json!({"results": [{"name": "a"}]});
        assert_eq!(QueryData::new(&single).first_rows().len(), 1);

        let empty = json!({"results": []});
        assert!(QueryData::new(&empty).first_rows().is_empty());
        assert!(QueryData::new(&Value::Null).first_row().is_none());
    }

    #[test]
    fn test_field_text_fallbacks() {
        let row = json!({"tabname": "  customer ", "ncols": 10, "empty": ""});
        assert_eq!(field_text(&row, &["name", "tabname"]).as_deref(), Some("customer"));
        assert_eq!(field_text(&row, &["ncols"]).as_deref(), Some("10"));
        assert_eq!(field_text(&row, &["empty"]), None);
    }
}
