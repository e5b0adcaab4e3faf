//! Link registry service for the Zipline URL shortener.
//!
//! Owns every shortened link from creation to expiry: validates creation
//! requests, allocates short codes, resolves codes to their targets, and
//! records click history. Each operation reports its outcome into an
//! injected [`zipline_events::EventSink`], best-effort.

pub mod events;
pub mod generator;
pub mod registry;
mod store;

pub use generator::{CodeGenerator, RandomGenerator, GENERATED_CODE_LENGTH};
pub use registry::{CreateParams, LinkRegistry, Resolution, DEFAULT_VALIDITY_MINUTES};
