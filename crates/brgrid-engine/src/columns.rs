//! Column personalization
//!
//! Tracks which configured columns are visible and in what order, plus the
//! catalog shown in the "choose visible columns" panel. At least one column
//! stays visible at all times and the visible count never grows past the
//! configured maximum.

use brgrid_core::{Column, ColumnOption, ResolvedGridConfig};

/// Direction for moving a visible column one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the start of the visible list
    Earlier,
    /// Towards the end of the visible list
    Later,
}

#[derive(Debug, Clone)]
pub struct ColumnPersonalization {
    /// All configured columns
    columns: Vec<Column>,
    /// Selectable column catalog
    catalog: Vec<ColumnOption>,
    /// Visible fields, in display order
    visible: Vec<String>,
    max_selected: usize,
    /// Current catalog search query
    search_query: String,
    /// Visible fields as they stood when the panel was opened
    snapshot: Option<Vec<String>>,
}

impl ColumnPersonalization {
    pub fn new(
        columns: Vec<Column>,
        catalog: Vec<ColumnOption>,
        visible: Vec<String>,
        max_selected: usize,
    ) -> Self {
        Self {
            columns,
            catalog,
            visible,
            max_selected: max_selected.max(1),
            search_query: String::new(),
            snapshot: None,
        }
    }

    pub fn from_config(config: &ResolvedGridConfig) -> Self {
        Self::new(
            config.columns.clone(),
            config.personalization.available_columns.clone(),
            config.personalization.selected_columns.clone(),
            config.personalization.max_selected_columns,
        )
    }

    /// Visible fields, in display order
    pub fn visible_fields(&self) -> &[String] {
        &self.visible
    }

    /// Visible columns resolved to their definitions, in display order
    pub fn active_columns(&self) -> Vec<&Column> {
        self.visible
            .iter()
            .filter_map(|field| self.column(field))
            .collect()
    }

    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.field == field)
    }

    pub fn is_visible(&self, field: &str) -> bool {
        self.visible.iter().any(|f| f == field)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    pub fn catalog(&self) -> &[ColumnOption] {
        &self.catalog
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Catalog entries matching the search query on label, field or group
    pub fn filtered_options(&self) -> Vec<&ColumnOption> {
        let query = self.search_query.trim().to_lowercase();
        if query.is_empty() {
            return self.catalog.iter().collect();
        }
        self.catalog
            .iter()
            .filter(|option| option.search_text().contains(&query))
            .collect()
    }

    /// Header text for a field, falling back to the field itself
    pub fn header<'a>(&'a self, field: &'a str) -> &'a str {
        self.column(field)
            .map(|col| col.header.as_str())
            .unwrap_or(field)
    }

    /// Catalog group for a field, empty when ungrouped
    pub fn group(&self, field: &str) -> &str {
        self.catalog
            .iter()
            .find(|option| option.field == field)
            .and_then(|option| option.group.as_deref())
            .unwrap_or_default()
    }

    /// Show a hidden column or hide a visible one.
    ///
    /// Showing is refused at the maximum; hiding the last visible column is
    /// refused. Returns true when the visible list changed.
    pub fn toggle(&mut self, field: &str) -> bool {
        if self.is_visible(field) {
            return self.remove(field);
        }
        if self.column(field).is_none() {
            tracing::trace!(field, "Ignoring toggle of unknown column");
            return false;
        }
        if self.visible.len() >= self.max_selected {
            tracing::debug!(field, max = self.max_selected, "Visible column limit reached");
            return false;
        }
        self.visible.push(field.to_string());
        true
    }

    /// Hide a visible column unless it is the last one
    pub fn remove(&mut self, field: &str) -> bool {
        if !self.is_visible(field) {
            return false;
        }
        if self.visible.len() == 1 {
            tracing::debug!(field, "Refusing to hide the last visible column");
            return false;
        }
        self.visible.retain(|f| f != field);
        true
    }

    /// Swap a visible column with its neighbour. Moves past either end are no-ops.
    pub fn move_column(&mut self, field: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.visible.iter().position(|f| f == field) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Earlier => index.checked_sub(1),
            MoveDirection::Later => Some(index + 1).filter(|t| *t < self.visible.len()),
        };
        match target {
            Some(target) => {
                self.visible.swap(index, target);
                true
            }
            None => false,
        }
    }

    /// Remember the visible list as the panel opens
    pub fn begin_edit(&mut self) {
        self.snapshot = Some(self.visible.clone());
    }

    pub fn snapshot(&self) -> Option<&[String]> {
        self.snapshot.as_deref()
    }

    /// Close the panel keeping the current list
    pub fn commit(&mut self) -> Vec<String> {
        self.snapshot = None;
        self.search_query.clear();
        self.visible.clone()
    }

    /// Close the panel restoring the list from when it was opened.
    ///
    /// Without a snapshot the current list is kept.
    pub fn restore(&mut self) -> Vec<String> {
        if let Some(snapshot) = self.snapshot.take() {
            self.visible = snapshot;
        }
        self.search_query.clear();
        self.visible.clone()
    }
}
