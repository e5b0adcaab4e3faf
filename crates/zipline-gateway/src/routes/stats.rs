use axum::extract::State;
use axum::Json;

use crate::model::{LinkStats, StatsResponse, StatsSummary};
use crate::state::AppState;

/// `GET /api/stats`
///
/// Aggregate summary plus every link with its full click history, in
/// creation order.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let summary = StatsSummary::from(state.registry().summary());
    let links = state
        .registry()
        .list()
        .iter()
        .map(|link| LinkStats::new(link, state.base_url()))
        .collect();

    Json(StatsResponse { summary, links })
}
