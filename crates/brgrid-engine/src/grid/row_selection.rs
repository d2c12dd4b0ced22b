use brgrid_core::{ActionEvent, RowId};

use super::GridEngine;

impl GridEngine {
    fn row_selection_enabled(&self) -> bool {
        self.feature_enabled(self.config.features.enable_row_selection, "row selection")
    }

    fn emit_selection_changed(&mut self) {
        let selected = self.selected_records();
        self.dispatch(ActionEvent::selection_changed(selected));
    }

    /// Flip one row's checkbox. Unknown rows are ignored.
    pub fn toggle_row_selection(&mut self, id: RowId) {
        if !self.row_selection_enabled() {
            return;
        }
        if !self.store.contains(id) {
            tracing::debug!(row = %id, "Ignoring selection of unknown row");
            return;
        }
        self.selection.toggle(id);
        self.emit_selection_changed();
    }

    /// Select every row of the current page, or deselect them all when the
    /// page is already fully selected. Other pages are untouched.
    pub fn toggle_select_all_on_page(&mut self) {
        if !self.row_selection_enabled() {
            return;
        }
        if self.page_rows().is_empty() {
            return;
        }
        let select = !self.is_all_page_selected();
        let page = &self.view[self.page_range.clone()];
        self.selection.set_page(page, select);
        self.emit_selection_changed();
    }

    pub fn clear_selection(&mut self) {
        if !self.row_selection_enabled() {
            return;
        }
        self.selection.clear();
        self.emit_selection_changed();
    }
}
