//! API error mapping for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use zipline_core::ValidationError;

/// A request the gateway refuses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The creation request failed validation. Maps to `400` with a
    /// field-keyed error map, the shape the creation form consumes.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The short code has never been issued. Maps to `404`.
    #[error("short code not found: {0}")]
    NotFound(String),

    /// The short code exists but its validity period has passed. Maps
    /// to `410`.
    #[error("short link expired: {0}")]
    Expired(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": { (error.field()): error.to_string() } })),
            )
                .into_response(),
            ApiError::NotFound(code) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("no short link for '{code}'") })),
            )
                .into_response(),
            ApiError::Expired(code) => (
                StatusCode::GONE,
                Json(json!({ "error": format!("short link '{code}' has expired") })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let error = ApiError::from(ValidationError::InvalidValidity(0));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_codes_map_to_not_found() {
        let response = ApiError::NotFound("nosuch".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn expired_codes_map_to_gone() {
        let response = ApiError::Expired("flash1".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::GONE);
    }
}
