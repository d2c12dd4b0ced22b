//! brgrid core - data model for the library-agnostic grid contract
//!
//! This crate defines the types every other brgrid crate depends on:
//!
//! - `GridConfig` - the raw inbound configuration a screen hands to a grid
//! - `ResolvedGridConfig` / `GridAdapter` - the same configuration with every default applied
//! - `Column`, `ColumnOption` - column definitions and the personalization catalog
//! - `SortRule`, `FilterRule`, `RuleSlots` - criteria and their fixed-length editing slots
//! - `ActionEvent` - the single outbound notification shape
//! - Common types like `Row`, `RowId` and the `GridError` error type

mod action;
mod adapter;
mod column;
mod config;
mod error;
mod rules;
mod types;

pub use action::*;
pub use adapter::*;
pub use column::*;
pub use config::*;
pub use error::*;
pub use rules::*;
pub use types::*;

/// Records are plain JSON values; rows address into them by field name.
pub use serde_json::Value;
