use brgrid_core::{ActionEvent, ActionSource};

use super::GridEngine;
use crate::Paginator;

impl GridEngine {
    /// Run a navigation step and report the page if it moved
    fn navigate(&mut self, step: fn(&mut Paginator) -> bool) {
        if !self.feature_enabled(
            self.config.features.show_pagination_navigation,
            "pagination navigation",
        ) {
            return;
        }
        if !step(&mut self.paginator) {
            return;
        }
        self.recompute();
        self.dispatch(ActionEvent::paging(
            ActionSource::PageChange,
            self.paginator.current_page(),
            self.paginator.page_size(),
        ));
    }

    pub fn next_page(&mut self) {
        self.navigate(Paginator::go_next);
    }

    pub fn prev_page(&mut self) {
        self.navigate(Paginator::go_prev);
    }

    pub fn first_page(&mut self) {
        self.navigate(Paginator::go_first);
    }

    pub fn last_page(&mut self) {
        self.navigate(Paginator::go_last);
    }

    /// Change rows per page and return to page 1. A size of 0 is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if !self.feature_enabled(
            self.config.features.show_pagination_size_selector,
            "page size selector",
        ) {
            return;
        }
        if !self.paginator.set_page_size(page_size) {
            tracing::debug!(page_size, "Rejected page size");
            return;
        }
        self.recompute();
        self.dispatch(ActionEvent::paging(
            ActionSource::PageSizeChange,
            self.paginator.current_page(),
            self.paginator.page_size(),
        ));
    }
}
