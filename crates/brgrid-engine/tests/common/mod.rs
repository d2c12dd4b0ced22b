//! Common test fixtures and a recording action sink

#![allow(dead_code)]

use std::sync::Arc;

use brgrid_core::{ActionEvent, ActionSource, Column, GridConfig, Value};
use brgrid_engine::{EngineOptions, GridEngine};
use serde_json::json;

/// Collects every event an engine dispatches, for assertion in tests
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub events: Arc<parking_lot::Mutex<Vec<ActionEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `engine`'s events into this recorder
    pub fn attach(&self, engine: &mut GridEngine) {
        let events = Arc::clone(&self.events);
        engine.set_sink(move |event: ActionEvent| events.lock().push(event));
    }

    pub fn events(&self) -> Vec<ActionEvent> {
        self.events.lock().clone()
    }

    pub fn sources(&self) -> Vec<ActionSource> {
        self.events.lock().iter().map(|event| event.source).collect()
    }

    pub fn last(&self) -> Option<ActionEvent> {
        self.events.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

/// Build an engine with a recorder attached
pub fn engine_with_sink(config: &GridConfig) -> (GridEngine, RecordingSink) {
    engine_with_options(config, EngineOptions::default())
}

pub fn engine_with_options(
    config: &GridConfig,
    options: EngineOptions,
) -> (GridEngine, RecordingSink) {
    brgrid_settings::logging::init_for_tests();
    let mut engine = GridEngine::with_options(config, options);
    let sink = RecordingSink::new();
    sink.attach(&mut engine);
    (engine, sink)
}

/// Columns shared by the fixtures
pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("name", "Name"),
        Column::new("email", "Email"),
        Column::new("status", "Status"),
    ]
}

/// `count` users; the first `active` have status "Active", the rest "Inactive"
pub fn user_records(count: usize, active: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i + 1,
                "name": format!("User {:02}", i + 1),
                "email": format!("user{}@example.com", i + 1),
                "status": if i < active { "Active" } else { "Inactive" },
            })
        })
        .collect()
}

/// A paginated, sortable grid over `count` users
pub fn users_config(count: usize, active: usize, page_size: usize) -> GridConfig {
    GridConfig::new(user_columns(), user_records(count, active))
        .with_pagination(page_size)
        .with_sorting(true)
}

/// The `id` field of every row on the current page
pub fn page_ids(engine: &GridEngine) -> Vec<i64> {
    engine
        .page_rows()
        .iter()
        .filter_map(|row| row.field("id").and_then(Value::as_i64))
        .collect()
}
