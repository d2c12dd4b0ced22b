//! Grid engine - owns one grid's rows and interaction state
//!
//! Configuration flows in through [`GridEngine::load`]; every user gesture is
//! a method on the engine that mutates local state, re-runs the
//! filter → sort → paginate pipeline when the view depends on what changed,
//! and dispatches one [`ActionEvent`]. Gestures for disabled features and
//! out-of-range gestures are silent no-ops: no state change, no event.
//!
//! The gesture methods are split by concern:
//!
//! - `search` - search bar, view mode and refresh
//! - `criteria` - sort and filter panels
//! - `personalization` - columns panel
//! - `row_selection` - row checkboxes
//! - `paging` - page navigation and page size
//! - `menus` - toolbar, selection and context-menu actions

mod criteria;
mod menus;
mod paging;
mod personalization;
mod row_selection;
mod search;


use std::ops::Range;
use std::sync::Arc;

use brgrid_core::{
    stringify_value, ActionEvent, Column, ColumnOption, FilterRule, GridAdapter, GridConfig,
    RenderVariant, ResolvedGridConfig, Row, RowId, RuleSlots, SortRule, Value,
};

use crate::{
    ActionDispatcher, ActionSink, ColumnPersonalization, NullPosition, Paginator, PanelState,
    RowStore, SelectionTracker, ViewFilter, ViewSorter,
};

/// What cancelling the columns panel does to the visible columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnsCancelPolicy {
    /// Keep the edits made in the panel and report the current list
    #[default]
    EmitCurrent,
    /// Restore and report the list as it stood when the panel opened
    RestoreSnapshot,
}

/// Behaviour knobs that are not part of the grid configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub null_position: NullPosition,
    pub columns_cancel: ColumnsCancelPolicy,
}

impl EngineOptions {
    pub fn with_null_position(mut self, null_position: NullPosition) -> Self {
        self.null_position = null_position;
        self
    }

    pub fn with_columns_cancel(mut self, policy: ColumnsCancelPolicy) -> Self {
        self.columns_cancel = policy;
        self
    }
}

#[derive(Debug)]
pub struct GridEngine {
    config: ResolvedGridConfig,
    variant: RenderVariant,
    options: EngineOptions,

    store: RowStore,
    /// Filtered and sorted rows, all pages
    view: Vec<Row>,
    /// Slice of `view` on the current page
    page_range: Range<usize>,

    /// Editing slots bound to the sort panel
    sort_slots: RuleSlots<SortRule>,
    /// Editing slots bound to the filter panel
    filter_slots: RuleSlots<FilterRule>,
    /// Applied sort criteria
    active_sort: Vec<SortRule>,
    /// Applied filter criteria
    active_filters: Vec<FilterRule>,

    search_open: bool,
    search_term: String,
    zoom_mode: bool,

    columns: ColumnPersonalization,
    selection: SelectionTracker,
    paginator: Paginator,
    panels: PanelState,
    dispatcher: ActionDispatcher,
}

impl GridEngine {
    /// Create an engine for `config` with default options
    pub fn new(config: &GridConfig) -> Self {
        Self::with_options(config, EngineOptions::default())
    }

    pub fn with_options(config: &GridConfig, options: EngineOptions) -> Self {
        let resolved = GridAdapter::resolve(config);
        let mut engine = Self {
            columns: ColumnPersonalization::from_config(&resolved),
            paginator: Paginator::new(resolved.pagination, resolved.page_size),
            sort_slots: RuleSlots::blank(resolved.features.sort_levels),
            filter_slots: RuleSlots::blank(resolved.features.filter_levels),
            config: resolved.clone(),
            variant: RenderVariant::default(),
            options,
            store: RowStore::default(),
            view: Vec::new(),
            page_range: 0..0,
            active_sort: Vec::new(),
            active_filters: Vec::new(),
            search_open: false,
            search_term: String::new(),
            zoom_mode: false,
            selection: SelectionTracker::new(),
            panels: PanelState::default(),
            dispatcher: ActionDispatcher::new(),
        };
        engine.load_config(resolved);
        engine
    }

    /// Attach the receiver of action events, replacing any previous one
    pub fn set_sink(&mut self, sink: impl ActionSink + 'static) {
        self.dispatcher.set_sink(sink);
    }

    /// Replace the configuration. All interaction state is rebuilt.
    pub fn load(&mut self, config: &GridConfig) {
        self.load_config(GridAdapter::resolve(config));
    }

    /// Replace the configuration with an already resolved one
    #[tracing::instrument(skip(self, config), fields(rows = config.data.len(), columns = config.columns.len()))]
    pub fn load_config(&mut self, config: ResolvedGridConfig) {
        self.store = RowStore::load(&config.data);
        self.sort_slots = RuleSlots::seed(&config.default_sort, config.features.sort_levels);
        self.filter_slots =
            RuleSlots::seed(&config.default_filters, config.features.filter_levels);
        self.active_sort = self.sort_slots.active();
        self.active_filters = self.filter_slots.active();
        self.columns = ColumnPersonalization::from_config(&config);
        self.paginator = Paginator::new(config.pagination, config.page_size);
        self.search_open = false;
        self.search_term.clear();
        self.selection.clear();
        self.panels = PanelState::default();
        self.config = config;
        self.recompute();

        tracing::debug!(
            total_rows = self.view.len(),
            active_sort = self.active_sort.len(),
            active_filters = self.active_filters.len(),
            "Grid loaded"
        );
    }

    /// Switch the presentation variant. Interaction state is untouched.
    pub fn set_variant(&mut self, variant: RenderVariant) {
        self.variant = variant;
    }

    pub fn variant(&self) -> RenderVariant {
        self.variant
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Re-run filter, sort and paginate over the loaded rows
    fn recompute(&mut self) {
        let features = self.config.features;

        let mut filter = ViewFilter::new();
        if features.enable_search {
            let fields = self
                .columns
                .active_columns()
                .into_iter()
                .map(|col| col.field.as_str());
            filter = filter.with_search(&self.search_term, fields);
        }
        if features.enable_filtering {
            filter = filter.with_rules(&self.active_filters);
        }
        let mut rows = filter.apply(self.store.rows());

        if self.config.sorting && features.enable_sorting {
            ViewSorter::new(&self.active_sort)
                .with_null_position(self.options.null_position)
                .sort_rows(&mut rows);
        }

        self.page_range = self.paginator.update(rows.len());
        self.view = rows;
    }

    /// Log a gesture rejected because its feature is off
    fn feature_enabled(&self, enabled: bool, feature: &'static str) -> bool {
        if !enabled {
            tracing::trace!(feature, "Ignoring gesture for disabled feature");
        }
        enabled
    }

    fn dispatch(&mut self, event: ActionEvent) {
        self.dispatcher.dispatch(event);
    }

    /// Selected records in row-store order
    pub fn selected_records(&self) -> Vec<Arc<Value>> {
        self.selection
            .selected_of(self.store.rows())
            .into_iter()
            .map(|row| Arc::clone(row.record()))
            .collect()
    }

    // Read side

    pub fn config(&self) -> &ResolvedGridConfig {
        &self.config
    }

    /// Rows of the current page
    pub fn page_rows(&self) -> &[Row] {
        &self.view[self.page_range.clone()]
    }

    /// Filtered and sorted rows across all pages
    pub fn view_rows(&self) -> &[Row] {
        &self.view
    }

    /// Every loaded row, in input order
    pub fn rows(&self) -> &[Row] {
        self.store.rows()
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.store.get(id)
    }

    /// Rows surviving search and filters
    pub fn total_rows(&self) -> usize {
        self.view.len()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn page_size_options(&self) -> &[usize] {
        self.paginator.page_size_options()
    }

    pub fn start_item(&self) -> usize {
        self.paginator.start_item()
    }

    pub fn end_item(&self) -> usize {
        self.paginator.end_item()
    }

    pub fn active_columns(&self) -> Vec<&Column> {
        self.columns.active_columns()
    }

    pub fn visible_column_fields(&self) -> &[String] {
        self.columns.visible_fields()
    }

    /// Catalog entries matching the columns panel search
    pub fn filtered_column_options(&self) -> Vec<&ColumnOption> {
        self.columns.filtered_options()
    }

    pub fn column_search(&self) -> &str {
        self.columns.search_query()
    }

    pub fn selected_row_ids(&self) -> Vec<RowId> {
        self.selection.ids()
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_row_selected(&self, id: RowId) -> bool {
        self.selection.is_selected(id)
    }

    /// Every row of the current page is selected
    pub fn is_all_page_selected(&self) -> bool {
        self.selection.is_all_selected(self.page_rows())
    }

    /// Some but not all rows of the current page are selected
    pub fn is_some_page_selected(&self) -> bool {
        self.selection.is_some_selected(self.page_rows()) && !self.is_all_page_selected()
    }

    pub fn sort_slots(&self) -> &[SortRule] {
        self.sort_slots.slots()
    }

    pub fn filter_slots(&self) -> &[FilterRule] {
        self.filter_slots.slots()
    }

    pub fn active_sort(&self) -> &[SortRule] {
        &self.active_sort
    }

    pub fn active_filters(&self) -> &[FilterRule] {
        &self.active_filters
    }

    /// Badge count for the sort button
    pub fn active_sort_count(&self) -> usize {
        self.active_sort.len()
    }

    /// Badge count for the filter button
    pub fn active_filter_count(&self) -> usize {
        self.active_filters.len()
    }

    /// Display text of one cell
    pub fn cell_value(&self, row: &Row, field: &str) -> String {
        match self.config.column(field) {
            Some(column) => column.format_cell(row.record()),
            None => stringify_value(row.field(field)).into_owned(),
        }
    }

    pub fn column_header<'a>(&'a self, field: &'a str) -> &'a str {
        self.columns.header(field)
    }

    pub fn column_group(&self, field: &str) -> &str {
        self.columns.group(field)
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn zoom_mode(&self) -> bool {
        self.zoom_mode
    }

    /// Message to show when the current page is empty
    pub fn empty_message(&self) -> Option<&str> {
        self.view
            .is_empty()
            .then_some(self.config.empty_message.as_str())
    }
}
