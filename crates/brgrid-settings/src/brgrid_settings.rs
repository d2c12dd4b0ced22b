//! brgrid settings - runtime presentation modes, grid config files and logging
//!
//! - `ui_mode` - which presentation family renders each control, with
//!   last-value replay to subscribers
//! - `settings_file` - loading `GridConfig` from JSON or TOML files
//! - `logging` - `tracing` subscriber setup

pub mod logging;
mod settings_file;
mod ui_mode;

pub use settings_file::*;
pub use ui_mode::*;
