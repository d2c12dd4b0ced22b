//! Raw grid configuration - the library-agnostic inbound contract
//!
//! Screens hand a `GridConfig` to a grid. Everything except `columns` and
//! `data` is optional; `GridAdapter::resolve` fills in the defaults.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Column, ColumnOption, FilterRule, GridAction, Result, SortRule};

/// Toolbar behaviour and actions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolbarConfig {
    pub show_sort: Option<bool>,
    pub show_filter: Option<bool>,
    pub show_search: Option<bool>,
    pub show_refresh: Option<bool>,
    pub show_column_settings: Option<bool>,
    pub show_share: Option<bool>,
    pub show_view_mode: Option<bool>,
    pub primary_action_label: Option<String>,
    pub primary_actions: Option<Vec<GridAction>>,
}

/// Column personalization source and default selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalizationConfig {
    pub available_columns: Option<Vec<ColumnOption>>,
    pub selected_columns: Option<Vec<String>>,
    pub max_selected_columns: Option<usize>,
    pub search_placeholder: Option<String>,
}

/// Master feature toggles for one grid instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureConfig {
    pub enable_top_bar: Option<bool>,
    pub enable_row_selection: Option<bool>,
    pub enable_selection_actions: Option<bool>,
    pub enable_context_menu: Option<bool>,
    pub enable_row_action_button: Option<bool>,
    pub enable_column_personalization: Option<bool>,
    pub enable_column_visibility_toggle: Option<bool>,
    pub enable_column_reorder: Option<bool>,
    pub enable_sorting: Option<bool>,
    pub sort_levels: Option<i64>,
    pub enable_filtering: Option<bool>,
    pub filter_levels: Option<i64>,
    pub enable_search: Option<bool>,
    pub enable_refresh: Option<bool>,
    pub enable_share: Option<bool>,
    pub enable_view_mode: Option<bool>,
    pub enable_primary_action: Option<bool>,
    pub enable_primary_action_menu: Option<bool>,
    pub show_pagination_size_selector: Option<bool>,
    pub show_pagination_summary: Option<bool>,
    pub show_pagination_navigation: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Soft,
    Sharp,
    None,
}

/// Visual options handed through to whichever renderer is active
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    pub density: Option<Density>,
    pub size: Option<GridSize>,
    pub border_style: Option<BorderStyle>,
    pub show_badge: Option<bool>,
    pub sticky_header: Option<bool>,
    pub class_name: Option<String>,
    /// Design tokens; values are strings or numbers
    pub tokens: Option<IndexMap<String, Value>>,
}

/// The grid configuration a consumer screen passes in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub columns: Vec<Column>,
    pub data: Vec<Value>,
    pub pagination: Option<bool>,
    pub page_size: Option<usize>,
    pub sorting: Option<bool>,
    pub striped: Option<bool>,
    pub title: Option<String>,
    pub empty_message: Option<String>,
    pub toolbar: Option<ToolbarConfig>,
    pub context_menu_actions: Option<Vec<GridAction>>,
    pub selection_actions: Option<Vec<GridAction>>,
    pub personalization: Option<PersonalizationConfig>,
    pub default_sort: Option<Vec<SortRule>>,
    pub default_filters: Option<Vec<FilterRule>>,
    pub features: Option<FeatureConfig>,
    pub ui_config: Option<UiConfig>,
}

impl GridConfig {
    pub fn new(columns: Vec<Column>, data: Vec<Value>) -> Self {
        Self {
            columns,
            data,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_pagination(mut self, page_size: usize) -> Self {
        self.pagination = Some(true);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_sorting(mut self, sorting: bool) -> Self {
        self.sorting = Some(sorting);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_toolbar(mut self, toolbar: ToolbarConfig) -> Self {
        self.toolbar = Some(toolbar);
        self
    }

    pub fn with_features(mut self, features: FeatureConfig) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_personalization(mut self, personalization: PersonalizationConfig) -> Self {
        self.personalization = Some(personalization);
        self
    }

    pub fn with_default_sort(mut self, rules: Vec<SortRule>) -> Self {
        self.default_sort = Some(rules);
        self
    }

    pub fn with_default_filters(mut self, rules: Vec<FilterRule>) -> Self {
        self.default_filters = Some(rules);
        self
    }

    pub fn with_context_menu_actions(mut self, actions: Vec<GridAction>) -> Self {
        self.context_menu_actions = Some(actions);
        self
    }

    pub fn with_selection_actions(mut self, actions: Vec<GridAction>) -> Self {
        self.selection_actions = Some(actions);
        self
    }
}
