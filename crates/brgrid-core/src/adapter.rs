//! Grid adapter - turns a raw `GridConfig` into a fully defaulted configuration
//!
//! Every renderer consumes the same `ResolvedGridConfig`. The adapter is the
//! only place defaults live; nothing downstream checks for missing values.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    clamp_levels, BorderStyle, Column, ColumnOption, Density, FeatureConfig, FilterRule,
    GridAction, GridConfig, GridSize, SortRule,
};

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_MAX_SELECTED_COLUMNS: usize = 20;
pub const DEFAULT_RULE_LEVELS: i64 = 3;
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";
pub const DEFAULT_PRIMARY_ACTION_LABEL: &str = "Add Req";
pub const DEFAULT_COLUMN_SEARCH_PLACEHOLDER: &str = "Search for available columns";

/// Which family of presentation components renders the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderVariant {
    #[default]
    Custom,
    Material,
    Canvas,
}

impl RenderVariant {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::Material => "Material",
            Self::Canvas => "Canvas",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarSettings {
    pub show_sort: bool,
    pub show_filter: bool,
    pub show_search: bool,
    pub show_refresh: bool,
    pub show_column_settings: bool,
    pub show_share: bool,
    pub show_view_mode: bool,
    pub primary_action_label: String,
    pub primary_actions: Vec<GridAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalizationSettings {
    pub available_columns: Vec<ColumnOption>,
    pub selected_columns: Vec<String>,
    pub max_selected_columns: usize,
    pub search_placeholder: String,
}

/// Resolved feature toggles. A disabled feature's gesture is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    pub enable_top_bar: bool,
    pub enable_row_selection: bool,
    pub enable_selection_actions: bool,
    pub enable_context_menu: bool,
    pub enable_row_action_button: bool,
    pub enable_column_personalization: bool,
    pub enable_column_visibility_toggle: bool,
    pub enable_column_reorder: bool,
    pub enable_sorting: bool,
    pub sort_levels: usize,
    pub enable_filtering: bool,
    pub filter_levels: usize,
    pub enable_search: bool,
    pub enable_refresh: bool,
    pub enable_share: bool,
    pub enable_view_mode: bool,
    pub enable_primary_action: bool,
    pub enable_primary_action_menu: bool,
    pub show_pagination_size_selector: bool,
    pub show_pagination_summary: bool,
    pub show_pagination_navigation: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::resolve(None, true)
    }
}

impl FeatureFlags {
    /// Apply defaults to raw feature toggles.
    ///
    /// `sorting` is the data-level sorting flag, which `enable_sorting`
    /// follows when not set explicitly.
    pub fn resolve(raw: Option<&FeatureConfig>, sorting: bool) -> Self {
        let empty = FeatureConfig::default();
        let f = raw.unwrap_or(&empty);
        Self {
            enable_top_bar: f.enable_top_bar.unwrap_or(true),
            enable_row_selection: f.enable_row_selection.unwrap_or(true),
            enable_selection_actions: f.enable_selection_actions.unwrap_or(true),
            enable_context_menu: f.enable_context_menu.unwrap_or(true),
            enable_row_action_button: f.enable_row_action_button.unwrap_or(true),
            enable_column_personalization: f.enable_column_personalization.unwrap_or(true),
            enable_column_visibility_toggle: f.enable_column_visibility_toggle.unwrap_or(true),
            enable_column_reorder: f.enable_column_reorder.unwrap_or(true),
            enable_sorting: f.enable_sorting.unwrap_or(sorting),
            sort_levels: clamp_levels(f.sort_levels.unwrap_or(DEFAULT_RULE_LEVELS)),
            enable_filtering: f.enable_filtering.unwrap_or(true),
            filter_levels: clamp_levels(f.filter_levels.unwrap_or(DEFAULT_RULE_LEVELS)),
            enable_search: f.enable_search.unwrap_or(true),
            enable_refresh: f.enable_refresh.unwrap_or(true),
            enable_share: f.enable_share.unwrap_or(true),
            enable_view_mode: f.enable_view_mode.unwrap_or(true),
            enable_primary_action: f.enable_primary_action.unwrap_or(true),
            enable_primary_action_menu: f.enable_primary_action_menu.unwrap_or(true),
            show_pagination_size_selector: f.show_pagination_size_selector.unwrap_or(true),
            show_pagination_summary: f.show_pagination_summary.unwrap_or(true),
            show_pagination_navigation: f.show_pagination_navigation.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiSettings {
    pub density: Density,
    pub size: GridSize,
    pub border_style: BorderStyle,
    pub show_badge: bool,
    pub sticky_header: bool,
    pub class_name: String,
    pub tokens: IndexMap<String, Value>,
}

/// A grid configuration with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGridConfig {
    pub columns: Vec<Column>,
    pub data: Vec<Value>,
    pub pagination: bool,
    pub page_size: usize,
    pub sorting: bool,
    pub striped: bool,
    pub title: String,
    pub empty_message: String,
    pub toolbar: ToolbarSettings,
    pub context_menu_actions: Vec<GridAction>,
    pub selection_actions: Vec<GridAction>,
    pub personalization: PersonalizationSettings,
    pub default_sort: Vec<SortRule>,
    pub default_filters: Vec<FilterRule>,
    pub features: FeatureFlags,
    pub ui: UiSettings,
}

impl Default for ResolvedGridConfig {
    fn default() -> Self {
        GridAdapter::resolve(&GridConfig::default())
    }
}

impl ResolvedGridConfig {
    /// Look up a configured column by field
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.field == field)
    }
}

/// Adapted configuration for one render variant
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedGrid {
    pub variant: RenderVariant,
    pub config: ResolvedGridConfig,
    /// Flat list of column keys, only produced for the material variant
    pub displayed_columns: Option<Vec<String>>,
}

pub struct GridAdapter;

impl GridAdapter {
    fn default_row_actions() -> Vec<GridAction> {
        vec![
            GridAction::new("more-actions", "More Actions"),
            GridAction::new("edit", "Edit"),
            GridAction::new("save-as-new", "Save As New"),
            GridAction::new("status", "Status"),
            GridAction::new("posting", "Posting"),
        ]
    }

    /// Resolve a raw configuration against every documented default
    pub fn resolve(config: &GridConfig) -> ResolvedGridConfig {
        let columns = dedup_columns(&config.columns);
        let personalization = config.personalization.clone().unwrap_or_default();

        let mut selected_columns: Vec<String> = personalization
            .selected_columns
            .unwrap_or_default()
            .into_iter()
            .filter(|field| columns.iter().any(|col| &col.field == field))
            .collect();
        if selected_columns.is_empty() {
            selected_columns = columns.iter().map(|col| col.field.clone()).collect();
        }

        let raw_available = personalization
            .available_columns
            .filter(|options| !options.is_empty())
            .unwrap_or_else(|| {
                columns
                    .iter()
                    .map(|col| ColumnOption::new(col.field.clone()).with_label(col.header.clone()))
                    .collect()
            });
        let available_columns = raw_available
            .into_iter()
            .map(|option| {
                let label = option.label.clone().unwrap_or_else(|| {
                    columns
                        .iter()
                        .find(|col| col.field == option.field)
                        .map(|col| col.header.clone())
                        .unwrap_or_else(|| option.field.clone())
                });
                ColumnOption {
                    label: Some(label),
                    ..option
                }
            })
            .collect();

        let sorting = config.sorting.unwrap_or(false);
        let toolbar = config.toolbar.clone().unwrap_or_default();
        let ui = config.ui_config.clone().unwrap_or_default();

        ResolvedGridConfig {
            columns,
            data: config.data.clone(),
            pagination: config.pagination.unwrap_or(false),
            page_size: config
                .page_size
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            sorting,
            striped: config.striped.unwrap_or(true),
            title: config.title.clone().unwrap_or_default(),
            empty_message: config
                .empty_message
                .clone()
                .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
            toolbar: ToolbarSettings {
                show_sort: toolbar.show_sort.unwrap_or(true),
                show_filter: toolbar.show_filter.unwrap_or(true),
                show_search: toolbar.show_search.unwrap_or(true),
                show_refresh: toolbar.show_refresh.unwrap_or(true),
                show_column_settings: toolbar.show_column_settings.unwrap_or(true),
                show_share: toolbar.show_share.unwrap_or(true),
                show_view_mode: toolbar.show_view_mode.unwrap_or(true),
                primary_action_label: toolbar
                    .primary_action_label
                    .unwrap_or_else(|| DEFAULT_PRIMARY_ACTION_LABEL.to_string()),
                primary_actions: toolbar.primary_actions.unwrap_or_default(),
            },
            context_menu_actions: non_empty_or(
                config.context_menu_actions.clone(),
                Self::default_row_actions,
            ),
            selection_actions: non_empty_or(
                config.selection_actions.clone(),
                Self::default_row_actions,
            ),
            personalization: PersonalizationSettings {
                available_columns,
                selected_columns,
                max_selected_columns: personalization
                    .max_selected_columns
                    .unwrap_or(DEFAULT_MAX_SELECTED_COLUMNS)
                    .max(1),
                search_placeholder: personalization
                    .search_placeholder
                    .unwrap_or_else(|| DEFAULT_COLUMN_SEARCH_PLACEHOLDER.to_string()),
            },
            default_sort: config.default_sort.clone().unwrap_or_default(),
            default_filters: config.default_filters.clone().unwrap_or_default(),
            features: FeatureFlags::resolve(config.features.as_ref(), sorting),
            ui: UiSettings {
                density: ui.density.unwrap_or_default(),
                size: ui.size.unwrap_or_default(),
                border_style: ui.border_style.unwrap_or_default(),
                show_badge: ui.show_badge.unwrap_or(true),
                sticky_header: ui.sticky_header.unwrap_or(false),
                class_name: ui.class_name.unwrap_or_default(),
                tokens: ui.tokens.unwrap_or_default(),
            },
        }
    }

    /// Adapt for the hand-built presentation
    pub fn to_custom(config: &GridConfig) -> AdaptedGrid {
        Self::adapt(config, RenderVariant::Custom)
    }

    /// Adapt for the widget-library table, which needs a flat column key list
    pub fn to_material(config: &GridConfig) -> AdaptedGrid {
        Self::adapt(config, RenderVariant::Material)
    }

    /// Adapt for the canvas-style presentation
    pub fn to_canvas(config: &GridConfig) -> AdaptedGrid {
        Self::adapt(config, RenderVariant::Canvas)
    }

    pub fn adapt(config: &GridConfig, variant: RenderVariant) -> AdaptedGrid {
        let config = Self::resolve(config);
        let displayed_columns = match variant {
            RenderVariant::Material => {
                Some(config.columns.iter().map(|col| col.field.clone()).collect())
            }
            RenderVariant::Custom | RenderVariant::Canvas => None,
        };
        AdaptedGrid {
            variant,
            config,
            displayed_columns,
        }
    }
}

fn non_empty_or(
    actions: Option<Vec<GridAction>>,
    fallback: impl FnOnce() -> Vec<GridAction>,
) -> Vec<GridAction> {
    match actions {
        Some(actions) if !actions.is_empty() => actions,
        _ => fallback(),
    }
}

/// Columns are unique by field; later duplicates are dropped
fn dedup_columns(columns: &[Column]) -> Vec<Column> {
    let mut seen = HashSet::new();
    columns
        .iter()
        .filter(|col| {
            let fresh = seen.insert(col.field.as_str());
            if !fresh {
                tracing::warn!(field = %col.field, "Dropping duplicate column definition");
            }
            fresh
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PersonalizationConfig, ToolbarConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", "Full Name"),
            Column::new("status", "Status"),
        ]
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = GridAdapter::resolve(&GridConfig::new(columns(), vec![json!({ "id": 1 })]));

        assert!(!resolved.pagination);
        assert_eq!(resolved.page_size, 5);
        assert!(!resolved.sorting);
        assert!(resolved.striped);
        assert_eq!(resolved.title, "");
        assert_eq!(resolved.empty_message, "No data available");
        assert_eq!(resolved.toolbar.primary_action_label, "Add Req");
        assert!(resolved.toolbar.show_share);
        assert_eq!(resolved.context_menu_actions.len(), 5);
        assert_eq!(resolved.selection_actions[2].id, "save-as-new");
        assert_eq!(
            resolved.personalization.selected_columns,
            vec!["id", "name", "status"]
        );
        assert_eq!(resolved.personalization.max_selected_columns, 20);
        assert_eq!(
            resolved.personalization.available_columns[1],
            ColumnOption::new("name").with_label("Full Name")
        );
        assert!(!resolved.features.enable_sorting);
        assert_eq!(resolved.features.sort_levels, 3);
        assert_eq!(resolved.features.filter_levels, 3);
        assert!(resolved.features.enable_search);
        assert_eq!(resolved.ui.density, Density::Comfortable);
        assert_eq!(resolved.ui.size, GridSize::Md);
        assert_eq!(resolved.ui.border_style, BorderStyle::Soft);
        assert!(resolved.ui.show_badge);
        assert!(!resolved.ui.sticky_header);
        assert!(resolved.ui.tokens.is_empty());
    }

    #[test]
    fn test_enable_sorting_follows_data_level_flag() {
        let resolved = GridAdapter::resolve(&GridConfig::new(columns(), vec![]).with_sorting(true));
        assert!(resolved.features.enable_sorting);

        let resolved = GridAdapter::resolve(
            &GridConfig::new(columns(), vec![])
                .with_sorting(true)
                .with_features(FeatureConfig {
                    enable_sorting: Some(false),
                    ..Default::default()
                }),
        );
        assert!(!resolved.features.enable_sorting);
    }

    #[test]
    fn test_levels_are_clamped() {
        let resolved = GridAdapter::resolve(&GridConfig::new(columns(), vec![]).with_features(
            FeatureConfig {
                sort_levels: Some(0),
                filter_levels: Some(12),
                ..Default::default()
            },
        ));
        assert_eq!(resolved.features.sort_levels, 1);
        assert_eq!(resolved.features.filter_levels, 6);
    }

    #[test]
    fn test_selected_columns_filtered_to_known_fields() {
        let resolved = GridAdapter::resolve(&GridConfig::new(columns(), vec![]).with_personalization(
            PersonalizationConfig {
                selected_columns: Some(vec!["status".into(), "ghost".into(), "id".into()]),
                ..Default::default()
            },
        ));
        assert_eq!(resolved.personalization.selected_columns, vec!["status", "id"]);

        let resolved = GridAdapter::resolve(&GridConfig::new(columns(), vec![]).with_personalization(
            PersonalizationConfig {
                selected_columns: Some(vec!["ghost".into()]),
                max_selected_columns: Some(0),
                ..Default::default()
            },
        ));
        assert_eq!(
            resolved.personalization.selected_columns,
            vec!["id", "name", "status"]
        );
        assert_eq!(resolved.personalization.max_selected_columns, 1);
    }

    #[test]
    fn test_available_column_labels_fall_back() {
        let resolved = GridAdapter::resolve(&GridConfig::new(columns(), vec![]).with_personalization(
            PersonalizationConfig {
                available_columns: Some(vec![
                    ColumnOption::new("name").with_group("Identity"),
                    ColumnOption::new("region").with_group("Location"),
                    ColumnOption::new("status").with_label("State"),
                ]),
                ..Default::default()
            },
        ));

        assert_eq!(
            resolved.personalization.available_columns,
            vec![
                ColumnOption::new("name")
                    .with_label("Full Name")
                    .with_group("Identity"),
                ColumnOption::new("region")
                    .with_label("region")
                    .with_group("Location"),
                ColumnOption::new("status").with_label("State"),
            ]
        );
    }

    #[test]
    fn test_explicit_values_survive() {
        let config = GridConfig::new(columns(), vec![])
            .with_pagination(0)
            .with_title("Orders")
            .with_toolbar(ToolbarConfig {
                primary_action_label: Some("New Order".into()),
                show_share: Some(false),
                ..Default::default()
            })
            .with_context_menu_actions(vec![GridAction::new("open", "Open")])
            .with_selection_actions(vec![]);
        let resolved = GridAdapter::resolve(&config);

        assert!(resolved.pagination);
        assert_eq!(resolved.page_size, 5);
        assert_eq!(resolved.title, "Orders");
        assert_eq!(resolved.toolbar.primary_action_label, "New Order");
        assert!(!resolved.toolbar.show_share);
        assert_eq!(resolved.context_menu_actions, vec![GridAction::new("open", "Open")]);
        assert_eq!(resolved.selection_actions.len(), 5);
    }

    #[test]
    fn test_duplicate_columns_dropped() {
        let resolved = GridAdapter::resolve(&GridConfig::new(
            vec![
                Column::new("id", "ID"),
                Column::new("id", "Identifier"),
                Column::new("name", "Name"),
            ],
            vec![],
        ));
        assert_eq!(resolved.columns.len(), 2);
        assert_eq!(resolved.column("id").map(|c| c.header.as_str()), Some("ID"));
    }

    #[test]
    fn test_material_variant_lists_displayed_columns() {
        let config = GridConfig::new(columns(), vec![]);

        let material = GridAdapter::to_material(&config);
        assert_eq!(material.variant, RenderVariant::Material);
        assert_eq!(
            material.displayed_columns,
            Some(vec!["id".to_string(), "name".to_string(), "status".to_string()])
        );

        assert_eq!(GridAdapter::to_custom(&config).displayed_columns, None);
        assert_eq!(GridAdapter::to_canvas(&config).variant, RenderVariant::Canvas);
    }
}
