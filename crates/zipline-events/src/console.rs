use crate::event::Event;
use crate::sink::{EventSink, Result};

/// Optional reporting identity stamped into every console record.
#[derive(Debug, Clone, Default)]
pub struct Operator {
    pub name: Option<String>,
    pub email: Option<String>,
    pub id: Option<String>,
}

impl Operator {
    /// One-line form of the fields that are present, or `None` when the
    /// identity is entirely empty.
    pub fn stamp(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            parts.push(name.clone());
        }
        if let Some(email) = &self.email {
            parts.push(format!("<{email}>"));
        }
        if let Some(id) = &self.id {
            parts.push(format!("({id})"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Writes event records to the process log stream via `tracing`.
///
/// Nothing is persisted beyond what the configured subscriber prints.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    operator: Option<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that stamps the operator identity into every record.
    pub fn with_operator(operator: &Operator) -> Self {
        Self {
            operator: operator.stamp(),
        }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: Event) -> Result<()> {
        match &self.operator {
            Some(operator) => tracing::info!(
                target: "zipline::event",
                event_type = %event.event_type,
                timestamp = %event.timestamp,
                operator = %operator,
                data = %event.data,
                "event recorded"
            ),
            None => tracing::info!(
                target: "zipline::event",
                event_type = %event.event_type,
                timestamp = %event.timestamp,
                data = %event.data,
                "event recorded"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn stamp_joins_present_fields() {
        let operator = Operator {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            id: Some("22BCE1234".into()),
        };
        assert_eq!(
            operator.stamp().unwrap(),
            "Jane Doe <jane@example.com> (22BCE1234)"
        );
    }

    #[test]
    fn stamp_skips_missing_fields() {
        let operator = Operator {
            name: None,
            email: Some("jane@example.com".into()),
            id: None,
        };
        assert_eq!(operator.stamp().unwrap(), "<jane@example.com>");
    }

    #[test]
    fn empty_identity_has_no_stamp() {
        assert!(Operator::default().stamp().is_none());
    }

    #[test]
    fn emit_always_accepts() {
        let sink = ConsoleSink::with_operator(&Operator::default());
        let event = Event::new("URL_CREATED", json!({ "shortcode": "abc123" }));
        assert!(sink.emit(event).is_ok());
    }
}
