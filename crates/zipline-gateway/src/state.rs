use std::sync::Arc;

use zipline_events::EventSink;
use zipline_registry::LinkRegistry;

/// Shared state available to every request handler.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<LinkRegistry>,
    events: Arc<dyn EventSink>,
    base_url: String,
}

impl AppState {
    pub fn new(
        registry: Arc<LinkRegistry>,
        events: Arc<dyn EventSink>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            events,
            base_url: base_url.into(),
        }
    }

    pub fn registry(&self) -> &LinkRegistry {
        &self.registry
    }

    /// Sink the logging endpoint writes client events into.
    pub fn events(&self) -> &dyn EventSink {
        self.events.as_ref()
    }

    /// Base URL short links are composed against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
