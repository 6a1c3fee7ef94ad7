use axum::{extract::State, response::IntoResponse};

use crate::services::metrics::render_metrics;
use crate::startup::AppState;

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    render_metrics(&state.metrics)
}
