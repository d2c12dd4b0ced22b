//! Core types for brgrid

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of a row within one data load.
///
/// Assigned from the record's position at load time, so it is only stable
/// until the next load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub usize);

impl RowId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for RowId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// One element of the caller's data array together with its identity
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    record: Arc<Value>,
}

impl Row {
    /// Create a new row
    pub fn new(id: RowId, record: Arc<Value>) -> Self {
        Self { id, record }
    }

    /// Get the row identity
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Get the original record
    pub fn record(&self) -> &Arc<Value> {
        &self.record
    }

    /// Get a field of the record by name.
    ///
    /// Returns `None` for missing fields and for records that are not objects.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.record.get(name)
    }
}

/// Stringify a raw cell value the way search, filtering and plain cell
/// rendering see it.
///
/// Null and missing values become the empty string. Arrays are joined with
/// commas; objects render as compact JSON.
pub fn stringify_value(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(b)) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(Value::Array(items)) => Cow::Owned(
            items
                .iter()
                .map(|item| stringify_value(Some(item)).into_owned())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Some(object @ Value::Object(_)) => Cow::Owned(object.to_string()),
    }
}

/// Lower-cased stringification used by case-insensitive matching
pub fn normalized_value(value: Option<&Value>) -> String {
    stringify_value(value).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_field_lookup() {
        let row = Row::new(RowId(3), Arc::new(json!({ "name": "Ann", "age": 31 })));
        assert_eq!(row.id(), RowId(3));
        assert_eq!(row.field("name"), Some(&json!("Ann")));
        assert_eq!(row.field("missing"), None);

        let scalar = Row::new(RowId(0), Arc::new(json!(42)));
        assert_eq!(scalar.field("name"), None);
    }

    #[test]
    fn test_stringify_value() {
        assert_eq!(stringify_value(None), "");
        assert_eq!(stringify_value(Some(&Value::Null)), "");
        assert_eq!(stringify_value(Some(&json!("Active"))), "Active");
        assert_eq!(stringify_value(Some(&json!(12))), "12");
        assert_eq!(stringify_value(Some(&json!(2.5))), "2.5");
        assert_eq!(stringify_value(Some(&json!(true))), "true");
        assert_eq!(stringify_value(Some(&json!([1, "a", null]))), "1,a,");
        assert_eq!(stringify_value(Some(&json!({ "k": 1 }))), "{\"k\":1}");
    }

    #[test]
    fn test_normalized_value() {
        assert_eq!(normalized_value(Some(&json!("MiXeD"))), "mixed");
    }
}
