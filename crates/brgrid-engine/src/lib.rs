//! brgrid engine - headless grid interaction engine
//!
//! Owns the in-memory row set of one grid and everything a user can do to
//! its view: free-text search, multi-level filtering and sorting, client-side
//! pagination, row selection, column personalization, menus and toolbar
//! actions. Every state-changing gesture produces exactly one `ActionEvent`.
//!
//! ## Module Structure
//!
//! - `row_store` - stable per-load row identities
//! - `view_filter` - search and filter rules
//! - `view_sorter` - multi-level sorting with null handling
//! - `paginator` - page slicing and navigation
//! - `selection` - selected row identities
//! - `columns` - visible columns, order and catalog
//! - `panels` - open/closed state of panels and menus
//! - `dispatcher` - delivery of action events to a sink
//! - `grid` - the `GridEngine` orchestrator

mod columns;
mod dispatcher;
mod grid;
mod paginator;
mod panels;
mod row_store;
mod selection;
mod view_filter;
mod view_sorter;

pub use columns::{ColumnPersonalization, MoveDirection};
pub use dispatcher::{ActionDispatcher, ActionSink};
pub use grid::{ColumnsCancelPolicy, EngineOptions, GridEngine};
pub use paginator::{Paginator, PAGE_SIZE_OPTIONS};
pub use panels::{ContextMenuState, PanelState};
pub use row_store::RowStore;
pub use selection::SelectionTracker;
pub use view_filter::ViewFilter;
pub use view_sorter::{NullPosition, ViewSorter};
