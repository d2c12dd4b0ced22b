use brgrid_core::{ActionEvent, ActionSource, RuleSlots};

use super::GridEngine;

impl GridEngine {
    /// Open or close the search bar. Closing clears the term.
    pub fn toggle_search(&mut self) {
        if !self.feature_enabled(self.config.features.enable_search, "search") {
            return;
        }
        self.search_open = !self.search_open;
        if !self.search_open {
            self.search_term.clear();
            self.paginator.reset();
            self.recompute();
        }
        let action_id = if self.search_open {
            "search-open"
        } else {
            "search-close"
        };
        self.dispatch(ActionEvent::signal(ActionSource::SearchToggle, action_id));
    }

    /// Update the free-text search term and return to page 1.
    ///
    /// Runs on every keystroke and emits no event.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        if !self.feature_enabled(self.config.features.enable_search, "search") {
            return;
        }
        self.search_term = term.into();
        self.paginator.reset();
        self.recompute();
    }

    /// Flip between the normal and zoomed layout
    pub fn toggle_view_mode(&mut self) {
        if !self.feature_enabled(self.config.features.enable_view_mode, "view mode") {
            return;
        }
        self.zoom_mode = !self.zoom_mode;
        let action_id = if self.zoom_mode {
            "view-mode-on"
        } else {
            "view-mode-off"
        };
        self.dispatch(ActionEvent::signal(ActionSource::ViewModeToggle, action_id));
    }

    /// Reset search, criteria, page and selection to their loaded state
    pub fn refresh(&mut self) {
        if !self.feature_enabled(self.config.features.enable_refresh, "refresh") {
            return;
        }
        self.search_open = false;
        self.search_term.clear();
        self.sort_slots =
            RuleSlots::seed(&self.config.default_sort, self.config.features.sort_levels);
        self.filter_slots = RuleSlots::seed(
            &self.config.default_filters,
            self.config.features.filter_levels,
        );
        self.active_sort = self.sort_slots.active();
        self.active_filters = self.filter_slots.active();
        self.selection.clear();
        self.paginator.reset();
        self.recompute();

        self.dispatch(ActionEvent::signal(ActionSource::Refresh, "refresh"));
    }
}
