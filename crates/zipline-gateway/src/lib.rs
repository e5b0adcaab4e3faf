//! HTTP gateway for the Zipline URL shortener.
//!
//! Hosts the link-creation API, the redirect route, the statistics
//! endpoint, and the event-logging endpoint, all over one shared
//! in-memory [`zipline_registry::LinkRegistry`].

pub mod cli;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use routes::router;
pub use state::AppState;
