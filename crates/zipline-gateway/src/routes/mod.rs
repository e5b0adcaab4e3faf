//! Route definitions for the gateway.
//!
//! - `POST /api/shorten` creates a short link
//! - `POST /api/log` records an application event
//! - `GET /api/stats` returns the summary and per-link click history
//! - `GET /health` is the liveness probe
//! - `GET /{code}` redirects to the original URL

mod health;
mod log;
mod redirect;
mod shorten;
mod stats;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the complete gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/shorten", post(shorten::shorten))
        .route("/api/log", post(log::record_event))
        .route("/api/stats", get(stats::stats))
        .route("/{code}", get(redirect::redirect))
        .with_state(state)
}
