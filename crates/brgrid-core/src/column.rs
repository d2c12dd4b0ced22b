//! Column definitions and the personalization catalog

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::stringify_value;

/// Per-cell rendering hook: `(value, record) -> text`
pub type CellFormatter = Arc<dyn Fn(&Value, &Value) -> String + Send + Sync>;

/// A column of the grid, unique by `field`
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Property name in the record
    pub field: String,
    /// Display header text
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    /// Column width (e.g. `100px`, `20%`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip)]
    pub formatter: Option<CellFormatter>,
}

impl Column {
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            sortable: None,
            width: None,
            formatter: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_formatter(
        mut self,
        formatter: impl Fn(&Value, &Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Render a cell of this column for `record`.
    ///
    /// Uses the formatter when one is set, otherwise the stringified raw value.
    pub fn format_cell(&self, record: &Value) -> String {
        let raw = record.get(&self.field);
        match &self.formatter {
            Some(formatter) => formatter(raw.unwrap_or(&Value::Null), record),
            None => stringify_value(raw).into_owned(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
            && self.header == other.header
            && self.sortable == other.sortable
            && self.width == other.width
            && match (&self.formatter, &other.formatter) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

/// Entry of the "choose visible columns" catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOption {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ColumnOption {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: None,
            group: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Text the catalog search matches against: `label field group`
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.label.as_deref().unwrap_or_default(),
            self.field,
            self.group.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_cell_plain_and_formatted() {
        let record = json!({ "amount": 12.5, "currency": "EUR" });

        let plain = Column::new("amount", "Amount");
        assert_eq!(plain.format_cell(&record), "12.5");

        let formatted = Column::new("amount", "Amount").with_formatter(|value, row| {
            format!("{} {}", value, row["currency"].as_str().unwrap_or_default())
        });
        assert_eq!(formatted.format_cell(&record), "12.5 EUR");

        let missing = Column::new("note", "Note");
        assert_eq!(missing.format_cell(&record), "");
    }

    #[test]
    fn test_column_deserializes_without_formatter() {
        let column: Column =
            serde_json::from_value(json!({ "field": "id", "header": "ID", "sortable": true }))
                .unwrap();
        assert_eq!(column.field, "id");
        assert_eq!(column.sortable, Some(true));
        assert!(column.formatter.is_none());
    }

    #[test]
    fn test_column_option_search_text() {
        let option = ColumnOption::new("email")
            .with_label("E-Mail")
            .with_group("Contact");
        assert_eq!(option.search_text(), "e-mail email contact");
        assert_eq!(ColumnOption::new("id").search_text(), " id ");
    }
}
