use axum::extract::{Path, State};
use axum::response::Redirect;
use zipline_registry::Resolution;

use crate::error::ApiError;
use crate::state::AppState;

/// Click source recorded for browser-driven resolutions.
const CLICK_SOURCE: &str = "direct";

/// `GET /{code}`
///
/// Temporary redirect to the original URL. Unknown codes are `404`,
/// expired ones `410`; neither counts as a click.
pub async fn redirect(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, ApiError> {
    match state.registry().resolve(&code, CLICK_SOURCE) {
        Resolution::Redirect(url) => Ok(Redirect::temporary(&url)),
        Resolution::NotFound => Err(ApiError::NotFound(code)),
        Resolution::Expired => Err(ApiError::Expired(code)),
    }
}
