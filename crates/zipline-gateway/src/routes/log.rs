use axum::extract::State;
use axum::Json;
use jiff::Timestamp;
use serde_json::json;
use tracing::debug;
use zipline_events::Event;

use crate::model::{LogRequest, LogResponse};
use crate::state::AppState;

/// `POST /api/log`
///
/// Accepts any event record and acknowledges it. A missing timestamp
/// defaults to arrival time. The acknowledgement does not depend on the
/// sink: a rejected record is logged and dropped.
pub async fn record_event(
    State(state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Json<LogResponse> {
    let timestamp = request.timestamp.unwrap_or_else(Timestamp::now);
    let data = request.data.unwrap_or_else(|| json!({}));
    let event = Event::at(request.event_type, data, timestamp);

    if let Err(error) = state.events().emit(event) {
        debug!(error = %error, "event sink rejected client record");
    }

    Json(LogResponse {
        success: true,
        message: "Event logged successfully",
    })
}
