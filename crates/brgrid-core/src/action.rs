//! Grid actions and the outbound action event

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FilterRule, SortRule};

/// A toolbar, selection or context-menu action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridAction {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GridAction>,
}

impl GridAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_children(mut self, children: Vec<GridAction>) -> Self {
        self.children = children;
        self
    }

    /// Find an action by id, descending into nested children
    pub fn find<'a>(actions: &'a [GridAction], id: &str) -> Option<&'a GridAction> {
        actions.iter().find_map(|action| {
            if action.id == id {
                Some(action)
            } else {
                Self::find(&action.children, id)
            }
        })
    }
}

/// Where an action event originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionSource {
    ToolbarPrimary,
    ToolbarPrimaryMenu,
    SelectionAction,
    ContextMenu,
    SortApply,
    SortClear,
    FilterApply,
    FilterClear,
    ColumnsSave,
    ColumnsCancel,
    Refresh,
    SearchToggle,
    ViewModeToggle,
    PageChange,
    PageSizeChange,
    SelectionChange,
}

impl ActionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToolbarPrimary => "toolbar-primary",
            Self::ToolbarPrimaryMenu => "toolbar-primary-menu",
            Self::SelectionAction => "selection-action",
            Self::ContextMenu => "context-menu",
            Self::SortApply => "sort-apply",
            Self::SortClear => "sort-clear",
            Self::FilterApply => "filter-apply",
            Self::FilterClear => "filter-clear",
            Self::ColumnsSave => "columns-save",
            Self::ColumnsCancel => "columns-cancel",
            Self::Refresh => "refresh",
            Self::SearchToggle => "search-toggle",
            Self::ViewModeToggle => "view-mode-toggle",
            Self::PageChange => "page-change",
            Self::PageSizeChange => "page-size-change",
            Self::SelectionChange => "selection-change",
        }
    }
}

impl fmt::Display for ActionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single outbound notification shape for every grid interaction.
///
/// Payload fields are only populated for the sources they belong to; the
/// constructors below are the only way the engine builds events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEvent {
    pub source: ActionSource,
    pub action_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<Arc<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_rows: Option<Vec<Arc<Value>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_criteria: Option<Vec<SortRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_criteria: Option<Vec<FilterRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl ActionEvent {
    fn bare(source: ActionSource, action_id: impl Into<String>) -> Self {
        Self {
            source,
            action_id: action_id.into(),
            label: None,
            row: None,
            selected_rows: None,
            sort_criteria: None,
            filter_criteria: None,
            visible_columns: None,
            page: None,
            page_size: None,
        }
    }

    /// An event with no payload (clears, refresh, search and view-mode toggles)
    pub fn signal(source: ActionSource, action_id: impl Into<String>) -> Self {
        Self::bare(source, action_id)
    }

    /// Primary toolbar button
    pub fn toolbar_primary(label: impl Into<String>) -> Self {
        let mut event = Self::bare(ActionSource::ToolbarPrimary, "toolbar-primary");
        event.label = Some(label.into());
        event
    }

    /// Entry of the primary action menu
    pub fn toolbar_menu(action: &GridAction) -> Self {
        let mut event = Self::bare(ActionSource::ToolbarPrimaryMenu, action.id.clone());
        event.label = Some(action.label.clone());
        event
    }

    pub fn sort_applied(criteria: Vec<SortRule>) -> Self {
        let mut event = Self::bare(ActionSource::SortApply, "sort-apply");
        event.sort_criteria = Some(criteria);
        event
    }

    pub fn filter_applied(criteria: Vec<FilterRule>) -> Self {
        let mut event = Self::bare(ActionSource::FilterApply, "filter-apply");
        event.filter_criteria = Some(criteria);
        event
    }

    /// Columns panel save or cancel
    pub fn columns(source: ActionSource, visible_columns: Vec<String>) -> Self {
        let mut event = Self::bare(source, source.as_str());
        event.visible_columns = Some(visible_columns);
        event
    }

    /// Page or page-size change
    pub fn paging(source: ActionSource, page: usize, page_size: usize) -> Self {
        let mut event = Self::bare(source, source.as_str());
        event.page = Some(page);
        event.page_size = Some(page_size);
        event
    }

    pub fn selection_changed(selected_rows: Vec<Arc<Value>>) -> Self {
        let mut event = Self::bare(ActionSource::SelectionChange, "selection-change");
        event.selected_rows = Some(selected_rows);
        event
    }

    pub fn selection_action(action: &GridAction, selected_rows: Vec<Arc<Value>>) -> Self {
        let mut event = Self::bare(ActionSource::SelectionAction, action.id.clone());
        event.label = Some(action.label.clone());
        event.selected_rows = Some(selected_rows);
        event
    }

    pub fn context_action(
        action: &GridAction,
        row: Option<Arc<Value>>,
        selected_rows: Vec<Arc<Value>>,
    ) -> Self {
        let mut event = Self::bare(ActionSource::ContextMenu, action.id.clone());
        event.label = Some(action.label.clone());
        event.row = row;
        event.selected_rows = Some(selected_rows);
        event
    }
}
