use thiserror::Error;

use crate::event::Event;

pub type Result<T> = std::result::Result<T, SinkError>;

/// Errors from an event transport.
///
/// Emission is fire-and-forget everywhere in this workspace: callers log
/// a failed emit at debug level and move on, never retry or surface it.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    /// The sink refused to accept the record.
    #[error("event sink rejected the record: {0}")]
    Rejected(String),
}

/// Destination for application events.
///
/// `emit` must not block the caller on slow transport; implementations
/// that write anywhere expensive queue internally.
pub trait EventSink: Send + Sync + 'static {
    /// Accepts one event for writing.
    fn emit(&self, event: Event) -> Result<()>;
}

/// A sink that accepts and discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: Event) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_sink_accepts_everything() {
        let sink = NullSink;
        for i in 0..3 {
            let event = Event::new("ANYTHING", json!({ "i": i }));
            assert!(sink.emit(event).is_ok());
        }
    }
}
