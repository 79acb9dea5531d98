//! Lookup outcome counters as JSON.
//! Used by: server.

use axum::extract::State;
use axum::Json;

use crate::state::AppState;
use crate::telemetry::MetricsSnapshot;

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let snapshot = state.metrics.snapshot();
    tracing::debug!(served = snapshot.records_served, "metrics snapshot requested");
    Json(snapshot)
}
