//! Sort and filter panels
//!
//! Slot edits only touch the editing slots. Applying copies the active slots
//! into the criteria the pipeline uses; clearing blanks both.

use brgrid_core::{ActionEvent, ActionSource, FilterRule, SortRule};

use super::GridEngine;

impl GridEngine {
    fn sorting_enabled(&self) -> bool {
        self.feature_enabled(self.config.features.enable_sorting, "sorting")
    }

    fn filtering_enabled(&self) -> bool {
        self.feature_enabled(self.config.features.enable_filtering, "filtering")
    }

    pub fn open_sort_panel(&mut self) {
        if self.sorting_enabled() {
            self.panels.sort_open = true;
        }
    }

    pub fn close_sort_panel(&mut self) {
        self.panels.sort_open = false;
    }

    /// Edit one sort slot. Returns false when the edit was rejected.
    pub fn set_sort_slot(&mut self, index: usize, rule: SortRule) -> bool {
        if !self.sorting_enabled() {
            return false;
        }
        let accepted = self.sort_slots.set(index, rule);
        if !accepted {
            tracing::debug!(index, levels = self.sort_slots.levels(), "Sort slot out of range");
        }
        accepted
    }

    /// Commit the sort slots and return to page 1
    pub fn apply_sort(&mut self) {
        if !self.sorting_enabled() {
            return;
        }
        self.active_sort = self.sort_slots.active();
        self.paginator.reset();
        self.recompute();
        self.panels.sort_open = false;

        self.dispatch(ActionEvent::sort_applied(self.active_sort.clone()));
    }

    /// Drop every sort criterion. The current page is kept where possible.
    pub fn clear_sort(&mut self) {
        if !self.sorting_enabled() {
            return;
        }
        self.sort_slots.clear();
        self.active_sort.clear();
        self.recompute();

        self.dispatch(ActionEvent::signal(ActionSource::SortClear, "sort-clear"));
    }

    pub fn open_filter_panel(&mut self) {
        if self.filtering_enabled() {
            self.panels.filter_open = true;
        }
    }

    pub fn close_filter_panel(&mut self) {
        self.panels.filter_open = false;
    }

    /// Edit one filter slot. Returns false when the edit was rejected.
    pub fn set_filter_slot(&mut self, index: usize, rule: FilterRule) -> bool {
        if !self.filtering_enabled() {
            return false;
        }
        let accepted = self.filter_slots.set(index, rule);
        if !accepted {
            tracing::debug!(
                index,
                levels = self.filter_slots.levels(),
                "Filter slot out of range"
            );
        }
        accepted
    }

    /// Commit the filter slots and return to page 1
    pub fn apply_filter(&mut self) {
        if !self.filtering_enabled() {
            return;
        }
        self.active_filters = self.filter_slots.active();
        self.paginator.reset();
        self.recompute();
        self.panels.filter_open = false;

        self.dispatch(ActionEvent::filter_applied(self.active_filters.clone()));
    }

    /// Drop every filter criterion. The current page is kept where possible.
    pub fn clear_filter(&mut self) {
        if !self.filtering_enabled() {
            return;
        }
        self.filter_slots.clear();
        self.active_filters.clear();
        self.recompute();

        self.dispatch(ActionEvent::signal(ActionSource::FilterClear, "filter-clear"));
    }
}
