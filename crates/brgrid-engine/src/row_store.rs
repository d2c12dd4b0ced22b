//! Row store - gives every record of one data load a stable identity

use std::sync::Arc;

use brgrid_core::{Row, RowId, Value};

/// All rows of the current data load, in input order
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    /// Wrap `records`, assigning each its position as identity
    pub fn load(records: &[Value]) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| Row::new(RowId(index), Arc::new(record.clone())))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by identity
    pub fn get(&self, id: RowId) -> Option<&Row> {
        // Identities are positions, so the lookup is direct.
        self.rows.get(id.index()).filter(|row| row.id() == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_assigns_positional_ids() {
        let store = RowStore::load(&[json!({ "n": "a" }), json!({ "n": "b" }), json!({ "n": "c" })]);

        let ids: Vec<RowId> = store.rows().iter().map(|row| row.id()).collect();
        assert_eq!(ids, vec![RowId(0), RowId(1), RowId(2)]);
        assert_eq!(store.get(RowId(1)).and_then(|r| r.field("n")), Some(&json!("b")));
        assert!(store.get(RowId(3)).is_none());
    }

    #[test]
    fn test_empty_load() {
        let store = RowStore::load(&[]);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(!store.contains(RowId(0)));
    }
}
