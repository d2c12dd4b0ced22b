//! Action dispatcher - delivers grid events to the host
//!
//! Events are delivered synchronously, one per gesture, in the order the
//! gestures happen. Without a sink, events are logged and dropped.

use brgrid_core::ActionEvent;

/// Receiver of grid action events
pub trait ActionSink {
    fn emit(&mut self, event: ActionEvent);
}

impl<F> ActionSink for F
where
    F: FnMut(ActionEvent),
{
    fn emit(&mut self, event: ActionEvent) {
        self(event)
    }
}

#[derive(Default)]
pub struct ActionDispatcher {
    sink: Option<Box<dyn ActionSink>>,
    emitted: u64,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: impl ActionSink + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
            emitted: 0,
        }
    }

    pub fn set_sink(&mut self, sink: impl ActionSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Number of events dispatched so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn dispatch(&mut self, event: ActionEvent) {
        self.emitted += 1;
        tracing::debug!(
            source = %event.source,
            action_id = %event.action_id,
            "Dispatching grid action"
        );
        match self.sink.as_mut() {
            Some(sink) => sink.emit(event),
            None => tracing::trace!(source = %event.source, "No action sink attached"),
        }
    }
}

impl std::fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("has_sink", &self.has_sink())
            .field("emitted", &self.emitted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brgrid_core::ActionSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_closure_sink_receives_events_in_order() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink_log = Rc::clone(&received);
        let mut dispatcher =
            ActionDispatcher::with_sink(move |event: ActionEvent| sink_log.borrow_mut().push(event));

        dispatcher.dispatch(ActionEvent::signal(ActionSource::Refresh, "refresh"));
        dispatcher.dispatch(ActionEvent::paging(ActionSource::PageChange, 2, 5));

        let sources: Vec<ActionSource> = received.borrow().iter().map(|e| e.source).collect();
        assert_eq!(sources, vec![ActionSource::Refresh, ActionSource::PageChange]);
        assert_eq!(dispatcher.emitted(), 2);
    }

    #[test]
    fn test_dispatch_without_sink_is_counted() {
        let mut dispatcher = ActionDispatcher::new();
        assert!(!dispatcher.has_sink());
        dispatcher.dispatch(ActionEvent::signal(ActionSource::SortClear, "sort-clear"));
        assert_eq!(dispatcher.emitted(), 1);
    }
}
