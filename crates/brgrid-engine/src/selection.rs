//! Row selection tracking
//!
//! Selection is a set of row identities. It survives page navigation,
//! sorting and filtering; only an explicit clear, a refresh or a new data
//! load empties it. "Select all" works on the current page only.

use std::collections::HashSet;

use brgrid_core::{Row, RowId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<RowId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    /// Select or deselect one row. Returns true when the set changed.
    pub fn set(&mut self, id: RowId, selected: bool) -> bool {
        if selected {
            self.selected.insert(id)
        } else {
            self.selected.remove(&id)
        }
    }

    /// Flip one row's selection
    pub fn toggle(&mut self, id: RowId) -> bool {
        let selected = !self.is_selected(id);
        self.set(id, selected);
        selected
    }

    /// Select or deselect every row of `page`, leaving other pages untouched
    pub fn set_page(&mut self, page: &[Row], selected: bool) {
        for row in page {
            self.set(row.id(), selected);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected identities in ascending order
    pub fn ids(&self) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Selected rows of `rows`, in the order of `rows`
    pub fn selected_of<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        rows.iter().filter(|row| self.is_selected(row.id())).collect()
    }

    /// Every row of a non-empty page is selected
    pub fn is_all_selected(&self, page: &[Row]) -> bool {
        !page.is_empty() && page.iter().all(|row| self.is_selected(row.id()))
    }

    /// At least one row of the page is selected
    pub fn is_some_selected(&self, page: &[Row]) -> bool {
        page.iter().any(|row| self.is_selected(row.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn page(ids: std::ops::Range<usize>) -> Vec<Row> {
        ids.map(|i| Row::new(RowId(i), Arc::new(json!({ "i": i }))))
            .collect()
    }

    #[test]
    fn test_set_and_toggle() {
        let mut selection = SelectionTracker::new();
        assert!(selection.set(RowId(7), true));
        assert!(!selection.set(RowId(7), true));
        assert!(selection.is_selected(RowId(7)));

        assert!(!selection.toggle(RowId(7)));
        assert!(selection.is_empty());
        assert!(selection.toggle(RowId(2)));
        assert_eq!(selection.ids(), vec![RowId(2)]);
    }

    #[test]
    fn test_page_scoped_select_all() {
        let first = page(0..5);
        let second = page(5..10);
        let mut selection = SelectionTracker::new();

        selection.set_page(&first, true);
        assert_eq!(selection.len(), 5);
        assert!(selection.is_all_selected(&first));
        assert!(!selection.is_all_selected(&second));
        assert!(!selection.is_some_selected(&second));

        selection.set(RowId(6), true);
        assert!(selection.is_some_selected(&second));
        assert!(!selection.is_all_selected(&second));

        selection.set_page(&first, false);
        assert_eq!(selection.ids(), vec![RowId(6)]);
    }

    #[test]
    fn test_empty_page_is_never_all_selected() {
        let selection = SelectionTracker::new();
        assert!(!selection.is_all_selected(&[]));
        assert!(!selection.is_some_selected(&[]));
    }

    #[test]
    fn test_selected_of_keeps_row_order() {
        let rows = page(0..4);
        let mut selection = SelectionTracker::new();
        selection.set(RowId(3), true);
        selection.set(RowId(1), true);

        let picked: Vec<RowId> = selection.selected_of(&rows).iter().map(|r| r.id()).collect();
        assert_eq!(picked, vec![RowId(1), RowId(3)]);
    }
}
