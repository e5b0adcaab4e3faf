//! Core types for the Zipline URL shortener.
//!
//! Everything the registry service and the HTTP gateway share lives here:
//! the link record and its click history, validated short codes, the
//! validation error taxonomy, and the clock seam that makes expiry
//! testable without waiting on wall time.

pub mod clock;
pub mod error;
pub mod link;
pub mod shortcode;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, ValidationError};
pub use link::{ClickRecord, Link, LinkId, Summary};
pub use shortcode::ShortCode;
