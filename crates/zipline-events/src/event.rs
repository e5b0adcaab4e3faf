use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single application event accepted by a sink.
///
/// The record mirrors the logging endpoint's wire contract: a free-form
/// event type, an arbitrary JSON payload, and an ISO-8601 timestamp.
/// Event types are names, not an enum; sinks accept whatever callers
/// decide to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_type: String,
    pub data: Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// An event stamped with the current system time.
    pub fn new(event_type: impl Into<String>, data: Value) -> Self {
        Self::at(event_type, data, Timestamp::now())
    }

    /// An event stamped with a caller-supplied instant.
    ///
    /// The registry passes its own clock reading here so event
    /// timestamps line up with the operation that produced them.
    pub fn at(event_type: impl Into<String>, data: Value, timestamp: Timestamp) -> Self {
        Self {
            event_type: event_type.into(),
            data,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let event = Event::at(
            "URL_CREATED",
            json!({ "shortcode": "abc123" }),
            Timestamp::UNIX_EPOCH,
        );

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["eventType"], "URL_CREATED");
        assert_eq!(value["data"]["shortcode"], "abc123");
        assert_eq!(value["timestamp"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn deserializes_from_wire_field_names() {
        let event: Event = serde_json::from_value(json!({
            "eventType": "URL_CLICKED",
            "data": {},
            "timestamp": "2026-01-15T12:00:00Z",
        }))
        .unwrap();

        assert_eq!(event.event_type, "URL_CLICKED");
        assert_eq!(event.timestamp.to_string(), "2026-01-15T12:00:00Z");
    }
}
