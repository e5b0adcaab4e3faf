use axum::extract::State;
use axum::Json;
use tracing::info;
use zipline_registry::CreateParams;

use crate::error::ApiError;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

/// `POST /api/shorten`
///
/// Validates the request and returns the stored link's code, full short
/// URL, and expiry.
pub async fn shorten(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, ApiError> {
    let params = CreateParams {
        original_url: request.original_url,
        validity_minutes: request.validity_period,
        custom_code: request.custom_shortcode,
    };

    let link = state.registry().create(params)?;
    info!(shortcode = %link.shortcode, expiry = %link.expiry_at, "short link created");

    Ok(Json(ShortenResponse {
        shortcode: link.shortcode.as_str().to_owned(),
        short_url: link.shortcode.to_url(state.base_url()),
        expiry_date: link.expiry_at,
    }))
}
