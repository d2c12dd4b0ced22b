//! Client-side pagination state
//!
//! Slices the filtered and sorted rows into the current page. Pages are
//! 1-indexed; navigation past either end is a no-op.

use std::ops::Range;

/// Page sizes always offered by the size selector
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 15];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    /// Whether the grid paginates at all
    enabled: bool,
    /// Current page number (1-indexed)
    current_page: usize,
    /// Rows per page, always at least 1
    page_size: usize,
    /// Rows in the filtered set at the last recompute
    total_rows: usize,
    /// Offered page sizes, sorted and unique
    page_size_options: Vec<usize>,
}

impl Paginator {
    pub fn new(enabled: bool, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let mut page_size_options = PAGE_SIZE_OPTIONS.to_vec();
        if !page_size_options.contains(&page_size) {
            page_size_options.push(page_size);
            page_size_options.sort_unstable();
        }
        Self {
            enabled,
            current_page: 1,
            page_size,
            total_rows: 0,
            page_size_options,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Calculate total number of pages, never less than 1
    pub fn total_pages(&self) -> usize {
        if !self.enabled {
            return 1;
        }
        self.total_rows.div_ceil(self.page_size).max(1)
    }

    /// Record a new row total and clamp the current page into range.
    ///
    /// Returns the index range of the current page within the full set.
    pub fn update(&mut self, total_rows: usize) -> Range<usize> {
        self.total_rows = total_rows;
        if !self.enabled {
            self.current_page = 1;
            return 0..total_rows;
        }

        let total_pages = self.total_pages();
        if self.current_page > total_pages {
            self.current_page = total_pages;
        }

        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(total_rows);
        start.min(end)..end
    }

    /// Return to page 1
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Check if we can navigate to next page
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Check if we can navigate to previous page
    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Navigate to next page. Returns true when the page changed.
    pub fn go_next(&mut self) -> bool {
        if self.can_go_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Navigate to previous page. Returns true when the page changed.
    pub fn go_prev(&mut self) -> bool {
        if self.can_go_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Navigate to first page. Returns true when the page changed.
    pub fn go_first(&mut self) -> bool {
        if self.current_page != 1 {
            self.current_page = 1;
            true
        } else {
            false
        }
    }

    /// Navigate to last page. Returns true when the page changed.
    pub fn go_last(&mut self) -> bool {
        let total_pages = self.total_pages();
        if self.current_page != total_pages {
            self.current_page = total_pages;
            true
        } else {
            false
        }
    }

    /// Set rows per page and return to page 1. A size of 0 is rejected.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        self.current_page = 1;
        true
    }

    /// 1-based index of the first row on the page, 0 when empty
    pub fn start_item(&self) -> usize {
        if self.total_rows == 0 {
            0
        } else if !self.enabled {
            1
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last row on the page
    pub fn end_item(&self) -> usize {
        if !self.enabled {
            return self.total_rows;
        }
        (self.current_page * self.page_size).min(self.total_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 1)]
    #[case(1, 5, 1)]
    #[case(5, 5, 1)]
    #[case(6, 5, 2)]
    #[case(12, 5, 3)]
    #[case(12, 1, 12)]
    fn test_total_pages(#[case] total: usize, #[case] size: usize, #[case] expected: usize) {
        let mut paginator = Paginator::new(true, size);
        paginator.update(total);
        assert_eq!(paginator.total_pages(), expected);
    }

    #[test]
    fn test_page_ranges() {
        let mut paginator = Paginator::new(true, 5);
        assert_eq!(paginator.update(12), 0..5);
        assert!(paginator.go_next());
        assert_eq!(paginator.update(12), 5..10);
        assert!(paginator.go_last());
        assert_eq!(paginator.update(12), 10..12);
        assert_eq!(paginator.start_item(), 11);
        assert_eq!(paginator.end_item(), 12);
    }

    #[test]
    fn test_navigation_stops_at_boundaries() {
        let mut paginator = Paginator::new(true, 5);
        paginator.update(8);

        assert!(!paginator.go_prev());
        assert!(!paginator.go_first());
        assert!(paginator.go_next());
        assert!(!paginator.go_next());
        assert!(!paginator.go_last());
        assert_eq!(paginator.current_page(), 2);
    }

    #[test]
    fn test_clamps_when_rows_shrink() {
        let mut paginator = Paginator::new(true, 5);
        paginator.update(12);
        paginator.go_last();
        assert_eq!(paginator.current_page(), 3);

        assert_eq!(paginator.update(7), 5..7);
        assert_eq!(paginator.current_page(), 2);

        assert_eq!(paginator.update(0), 0..0);
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.start_item(), 0);
        assert_eq!(paginator.end_item(), 0);
    }

    #[test]
    fn test_disabled_pagination_is_one_page() {
        let mut paginator = Paginator::new(false, 5);
        assert_eq!(paginator.update(12), 0..12);
        assert_eq!(paginator.total_pages(), 1);
        assert!(!paginator.go_next());
        assert_eq!(paginator.start_item(), 1);
        assert_eq!(paginator.end_item(), 12);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut paginator = Paginator::new(true, 5);
        paginator.update(30);
        paginator.go_last();
        assert!(paginator.set_page_size(10));
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.update(30), 0..10);
        assert!(!paginator.set_page_size(0));
        assert_eq!(paginator.page_size(), 10);
    }

    #[test]
    fn test_page_size_options_include_configured_size() {
        assert_eq!(Paginator::new(true, 10).page_size_options(), &[5, 10, 15]);
        assert_eq!(Paginator::new(true, 25).page_size_options(), &[5, 10, 15, 25]);
        assert_eq!(Paginator::new(true, 7).page_size_options(), &[5, 7, 10, 15]);
    }
}
