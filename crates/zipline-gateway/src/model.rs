//! Wire types for the gateway API.
//!
//! Field names are camelCase on the wire; timestamps serialize as
//! ISO-8601 strings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use zipline_core::{ClickRecord, Link, Summary};

/// Body of `POST /api/shorten`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: String,
    pub validity_period: Option<i64>,
    pub custom_shortcode: Option<String>,
}

/// Successful response of `POST /api/shorten`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub shortcode: String,
    pub short_url: String,
    pub expiry_date: Timestamp,
}

/// Body of `POST /api/log`. Only the event type is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRequest {
    pub event_type: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

/// Acknowledgement of `POST /api/log`.
#[derive(Debug, Clone, Serialize)]
pub struct LogResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Response of `GET /api/stats`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub summary: StatsSummary,
    pub links: Vec<LinkStats>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_links: usize,
    pub total_clicks: u64,
    pub active_links: usize,
}

impl From<Summary> for StatsSummary {
    fn from(summary: Summary) -> Self {
        Self {
            total_links: summary.total_links,
            total_clicks: summary.total_clicks,
            active_links: summary.active_links,
        }
    }
}

/// One link with its full click history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub id: u64,
    pub original_url: String,
    pub shortcode: String,
    pub short_url: String,
    pub created_at: Timestamp,
    pub expiry_date: Timestamp,
    pub clicks: u64,
    pub click_log: Vec<ClickEntry>,
}

impl LinkStats {
    pub fn new(link: &Link, base_url: &str) -> Self {
        Self {
            id: link.id.as_u64(),
            original_url: link.original_url.clone(),
            shortcode: link.shortcode.as_str().to_owned(),
            short_url: link.shortcode.to_url(base_url),
            created_at: link.created_at,
            expiry_date: link.expiry_at,
            clicks: link.clicks,
            click_log: link.click_log.iter().map(ClickEntry::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClickEntry {
    pub timestamp: Timestamp,
    pub source: String,
}

impl From<&ClickRecord> for ClickEntry {
    fn from(record: &ClickRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            source: record.source.clone(),
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use zipline_core::{LinkId, ShortCode};

    use super::*;

    #[test]
    fn shorten_request_reads_camel_case_fields() {
        let request: ShortenRequest = serde_json::from_value(json!({
            "originalUrl": "https://example.com/docs",
            "validityPeriod": 45,
            "customShortcode": "mylink",
        }))
        .unwrap();

        assert_eq!(request.original_url, "https://example.com/docs");
        assert_eq!(request.validity_period, Some(45));
        assert_eq!(request.custom_shortcode.as_deref(), Some("mylink"));
    }

    #[test]
    fn shorten_request_optionals_default_to_none() {
        let request: ShortenRequest =
            serde_json::from_value(json!({ "originalUrl": "https://example.com" })).unwrap();
        assert_eq!(request.validity_period, None);
        assert_eq!(request.custom_shortcode, None);
    }

    #[test]
    fn shorten_response_writes_camel_case_fields() {
        let response = ShortenResponse {
            shortcode: "abc123".to_owned(),
            short_url: "http://sho.rt/abc123".to_owned(),
            expiry_date: Timestamp::UNIX_EPOCH,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["shortcode"], "abc123");
        assert_eq!(value["shortUrl"], "http://sho.rt/abc123");
        assert_eq!(value["expiryDate"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn log_request_tolerates_a_bare_event_type() {
        let request: LogRequest =
            serde_json::from_value(json!({ "eventType": "URL_COPIED" })).unwrap();
        assert_eq!(request.event_type, "URL_COPIED");
        assert!(request.data.is_none());
        assert!(request.timestamp.is_none());
    }

    #[test]
    fn link_stats_compose_the_short_url() {
        let now = Timestamp::UNIX_EPOCH;
        let link = Link {
            id: LinkId::new(3),
            original_url: "https://example.com/docs".to_owned(),
            shortcode: ShortCode::new_unchecked("abc123"),
            created_at: now,
            expiry_at: now,
            clicks: 1,
            click_log: vec![ClickRecord {
                timestamp: now,
                source: "direct".to_owned(),
            }],
        };

        let stats = LinkStats::new(&link, "http://sho.rt");
        assert_eq!(stats.short_url, "http://sho.rt/abc123");

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["originalUrl"], "https://example.com/docs");
        assert_eq!(value["createdAt"], "1970-01-01T00:00:00Z");
        assert_eq!(value["clickLog"][0]["source"], "direct");
    }
}
