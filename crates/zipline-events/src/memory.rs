use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::Event;
use crate::sink::{EventSink, Result};

/// A sink that records every event in memory, in emission order.
///
/// Registry and gateway tests substitute this for the console sink to
/// observe what was emitted. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<Event>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Event types recorded so far, in emission order.
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .map(|event| event.event_type.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: Event) -> Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn records_events_in_emission_order() {
        let sink = MemorySink::new();
        sink.emit(Event::new("URL_CREATED", json!({}))).unwrap();
        sink.emit(Event::new("URL_CLICKED", json!({}))).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.event_types(), vec!["URL_CREATED", "URL_CLICKED"]);
    }

    #[test]
    fn clones_share_the_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        handle.emit(Event::new("URL_EXPIRED", json!({}))).unwrap();

        assert!(!sink.is_empty());
        assert_eq!(sink.events()[0].event_type, "URL_EXPIRED");
    }
}
