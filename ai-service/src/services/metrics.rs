//! Prometheus metrics for ai-service.
//!
//! HTTP request metrics come from `service_core::middleware::metrics`; this
//! module installs the recorder they feed and adds inference counters.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the process-wide Prometheus recorder. Safe to call repeatedly;
/// every call returns a handle to the same recorder.
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("Metrics recorder already installed");
            }
            handle
        })
        .clone()
}

/// Render all metrics in the Prometheus text format.
pub fn render_metrics(handle: &PrometheusHandle) -> String {
    handle.render()
}

pub fn record_expense_analysis(provider: &'static str, category: &str, risk_level: &'static str) {
    counter!(
        "ai_expense_analyses_total",
        "provider" => provider,
        "category" => category.to_string(),
        "risk_level" => risk_level
    )
    .increment(1);
}

pub fn record_spending_prediction(provider: &'static str, has_history: bool) {
    counter!(
        "ai_spending_predictions_total",
        "provider" => provider,
        "has_history" => if has_history { "true" } else { "false" }
    )
    .increment(1);
}

pub fn record_receipt_analysis(provider: &'static str) {
    counter!("ai_receipt_analyses_total", "provider" => provider).increment(1);
}

pub fn record_provider_error(provider: &'static str, operation: &'static str) {
    counter!(
        "ai_provider_errors_total",
        "provider" => provider,
        "operation" => operation
    )
    .increment(1);
}
