//! Toolbar, selection bar and context menu actions

use brgrid_core::{ActionEvent, GridAction, RowId};

use super::GridEngine;

impl GridEngine {
    /// Click on the primary toolbar button
    pub fn primary_action(&mut self) {
        if !self.feature_enabled(self.config.features.enable_primary_action, "primary action") {
            return;
        }
        let label = self.config.toolbar.primary_action_label.clone();
        self.dispatch(ActionEvent::toolbar_primary(label));
    }

    pub fn toggle_primary_action_menu(&mut self) {
        if self.feature_enabled(
            self.config.features.enable_primary_action_menu,
            "primary action menu",
        ) {
            self.panels.primary_menu_open = !self.panels.primary_menu_open;
        }
    }

    /// Pick an entry of the primary action menu, nested entries included
    pub fn primary_menu_action(&mut self, action_id: &str) -> bool {
        if !self.feature_enabled(
            self.config.features.enable_primary_action_menu,
            "primary action menu",
        ) {
            return false;
        }
        let Some(action) = GridAction::find(&self.config.toolbar.primary_actions, action_id) else {
            tracing::debug!(action_id, "Unknown primary menu action");
            return false;
        };
        let event = ActionEvent::toolbar_menu(action);
        self.panels.primary_menu_open = false;
        self.dispatch(event);
        true
    }

    /// Run a selection-bar action over the selected rows
    pub fn selection_action(&mut self, action_id: &str) -> bool {
        if !self.feature_enabled(
            self.config.features.enable_selection_actions,
            "selection actions",
        ) {
            return false;
        }
        let Some(action) = GridAction::find(&self.config.selection_actions, action_id) else {
            tracing::debug!(action_id, "Unknown selection action");
            return false;
        };
        let event = ActionEvent::selection_action(action, self.selected_records());
        self.dispatch(event);
        true
    }

    /// Open the context menu on a row at `anchor`
    pub fn open_context_menu(&mut self, row: RowId, anchor: (f32, f32)) -> bool {
        if !self.feature_enabled(self.config.features.enable_context_menu, "context menu") {
            return false;
        }
        if !self.store.contains(row) {
            tracing::debug!(row = %row, "Ignoring context menu on unknown row");
            return false;
        }
        self.panels.open_context_menu(row, anchor);
        true
    }

    pub fn close_context_menu(&mut self) {
        self.panels.close_context_menu();
    }

    /// Run a context-menu action on the row the menu was opened on
    pub fn context_action(&mut self, action_id: &str) -> bool {
        if !self.feature_enabled(self.config.features.enable_context_menu, "context menu") {
            return false;
        }
        let target = self
            .panels
            .context_menu
            .row
            .filter(|_| self.panels.context_menu.open)
            .and_then(|id| self.store.get(id));
        let Some(row) = target else {
            tracing::debug!(action_id, "Context action without a target row");
            return false;
        };
        let Some(action) = GridAction::find(&self.config.context_menu_actions, action_id) else {
            tracing::debug!(action_id, "Unknown context menu action");
            return false;
        };
        let event = ActionEvent::context_action(
            action,
            Some(row.record().clone()),
            self.selected_records(),
        );
        self.panels.close_context_menu();
        self.dispatch(event);
        true
    }

    /// Dismiss the context menu and the primary action menu.
    ///
    /// The host calls this for pointer events outside the tracked panels.
    pub fn close_transient_panels(&mut self) {
        self.panels.close_transient();
    }
}
