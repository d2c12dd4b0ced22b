use brgrid_core::{ActionEvent, ActionSource};

use super::{ColumnsCancelPolicy, GridEngine};
use crate::MoveDirection;

impl GridEngine {
    fn personalization_enabled(&self) -> bool {
        self.feature_enabled(
            self.config.features.enable_column_personalization,
            "column personalization",
        )
    }

    /// Open the columns panel, remembering the current visible list
    pub fn open_columns_panel(&mut self) {
        if !self.personalization_enabled() {
            return;
        }
        self.columns.begin_edit();
        self.panels.columns_open = true;
    }

    /// Filter the column catalog shown in the panel
    pub fn set_column_search(&mut self, query: impl Into<String>) {
        if self.personalization_enabled() {
            self.columns.set_search_query(query);
        }
    }

    /// Show or hide a column. Returns true when the visible list changed.
    pub fn toggle_column(&mut self, field: &str) -> bool {
        if !self.feature_enabled(
            self.config.features.enable_column_visibility_toggle,
            "column visibility",
        ) {
            return false;
        }
        let changed = self.columns.toggle(field);
        if changed {
            // Search covers the visible columns only
            self.recompute();
        }
        changed
    }

    /// Hide a column. The last visible column cannot be hidden.
    pub fn remove_column(&mut self, field: &str) -> bool {
        if !self.feature_enabled(
            self.config.features.enable_column_visibility_toggle,
            "column visibility",
        ) {
            return false;
        }
        let changed = self.columns.remove(field);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Swap a visible column with its neighbour
    pub fn move_column(&mut self, field: &str, direction: MoveDirection) -> bool {
        if !self.feature_enabled(self.config.features.enable_column_reorder, "column reorder") {
            return false;
        }
        self.columns.move_column(field, direction)
    }

    /// Close the columns panel keeping the edits
    pub fn save_columns(&mut self) {
        if !self.personalization_enabled() {
            return;
        }
        let visible = self.columns.commit();
        self.panels.columns_open = false;

        self.dispatch(ActionEvent::columns(ActionSource::ColumnsSave, visible));
    }

    /// Close the columns panel without saving.
    ///
    /// Under [`ColumnsCancelPolicy::EmitCurrent`] the edits stay applied and
    /// the event carries the current list.
    pub fn cancel_columns(&mut self) {
        if !self.personalization_enabled() {
            return;
        }
        let visible = match self.options.columns_cancel {
            ColumnsCancelPolicy::EmitCurrent => self.columns.commit(),
            ColumnsCancelPolicy::RestoreSnapshot => {
                let restored = self.columns.restore();
                self.recompute();
                restored
            }
        };
        self.panels.columns_open = false;

        self.dispatch(ActionEvent::columns(ActionSource::ColumnsCancel, visible));
    }
}
