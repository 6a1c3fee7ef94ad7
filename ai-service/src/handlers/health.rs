use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

pub const SERVICE_NAME: &str = "ai-service";

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running")),
    tag = "Observability"
)]
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "ControlSpending AI Service",
        "status": "running"
    }))
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy")),
    tag = "Observability"
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: every inference provider must report healthy.
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "All providers ready"),
        (status = 503, description = "A provider is unavailable")
    ),
    tag = "Observability"
)]
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks = [
        (
            state.expense_analyzer.name(),
            state.expense_analyzer.health_check().await,
        ),
        (
            state.spending_predictor.name(),
            state.spending_predictor.health_check().await,
        ),
        (
            state.receipt_analyzer.name(),
            state.receipt_analyzer.health_check().await,
        ),
    ];

    let mut ready = true;
    for (provider, result) in checks {
        if let Err(e) = result {
            tracing::warn!(provider, error = %e, "Provider not ready");
            ready = false;
        }
    }

    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
