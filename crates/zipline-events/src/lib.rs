//! Event records and sinks for the Zipline services.
//!
//! The registry reports link lifecycle events (creations, clicks, expiry
//! misses) into an [`EventSink`]; the gateway's logging endpoint feeds
//! arbitrary client events into the same sink. Sinks are write-only: an
//! accepted record goes to the process output stream and nowhere else,
//! so there is no queryable history.

pub mod console;
pub mod event;
pub mod memory;
pub mod sink;

pub use console::{ConsoleSink, Operator};
pub use event::Event;
pub use memory::MemorySink;
pub use sink::{EventSink, NullSink, SinkError};
