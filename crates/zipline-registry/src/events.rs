//! Names and payloads of the events the registry emits.
//!
//! Payload field names are camelCase to match the rest of the wire
//! surface.

use serde_json::{json, Value};
use zipline_core::{ClickRecord, Link, ValidationError};

/// Emitted after a link is stored.
pub const URL_CREATED: &str = "URL_CREATED";
/// Emitted when a creation request fails validation.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Emitted after a successful resolution.
pub const URL_CLICKED: &str = "URL_CLICKED";
/// Emitted when a resolved code exists but has expired.
pub const URL_EXPIRED: &str = "URL_EXPIRED";
/// Emitted when a resolved code has never been issued.
pub const URL_NOT_FOUND: &str = "URL_NOT_FOUND";

pub(crate) fn created(link: &Link) -> Value {
    json!({
        "shortcode": link.shortcode.as_str(),
        "originalUrl": link.original_url,
        "expiryDate": link.expiry_at,
    })
}

pub(crate) fn validation_error(error: &ValidationError) -> Value {
    json!({
        "errors": { (error.field()): error.to_string() },
    })
}

pub(crate) fn clicked(link: &Link, click: &ClickRecord) -> Value {
    json!({
        "shortcode": link.shortcode.as_str(),
        "originalUrl": link.original_url,
        "clickData": {
            "timestamp": click.timestamp,
            "source": click.source,
        },
    })
}

pub(crate) fn missed(shortcode: &str) -> Value {
    json!({ "shortcode": shortcode })
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use zipline_core::{LinkId, ShortCode};

    use super::*;

    #[test]
    fn validation_error_payload_is_keyed_by_field() {
        let error = ValidationError::InvalidValidity(0);
        let payload = validation_error(&error);
        assert_eq!(
            payload["errors"]["validityPeriod"],
            "validity period must be at least 1 minute, got 0"
        );
    }

    #[test]
    fn created_payload_carries_the_wire_fields() {
        let link = Link {
            id: LinkId::new(1),
            original_url: "https://example.com".to_owned(),
            shortcode: ShortCode::new_unchecked("abc123"),
            created_at: Timestamp::UNIX_EPOCH,
            expiry_at: Timestamp::UNIX_EPOCH,
            clicks: 0,
            click_log: Vec::new(),
        };

        let payload = created(&link);
        assert_eq!(payload["shortcode"], "abc123");
        assert_eq!(payload["originalUrl"], "https://example.com");
        assert_eq!(payload["expiryDate"], "1970-01-01T00:00:00Z");
    }
}
