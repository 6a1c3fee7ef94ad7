//! Application startup and lifecycle management.

use crate::config::{AiConfig, AuthConfig};
use crate::docs::ApiDoc;
use crate::handlers;
use crate::services::metrics::init_metrics;
use crate::services::{
    AverageSpendingPredictor, ExpenseAnalyzer, MockReceiptAnalyzer, ReceiptAnalyzer,
    RuleBasedExpenseAnalyzer, SpendingPredictor,
};
use axum::{
    extract::FromRef,
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use service_core::error::AppError;
use service_core::middleware::{
    cors::cors_layer, metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AiConfig,
    pub expense_analyzer: Arc<dyn ExpenseAnalyzer>,
    pub spending_predictor: Arc<dyn SpendingPredictor>,
    pub receipt_analyzer: Arc<dyn ReceiptAnalyzer>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// State wired with the rule-based providers.
    pub fn new(config: AiConfig) -> Self {
        let spending_predictor = AverageSpendingPredictor::new(config.prediction.start_date);

        Self {
            expense_analyzer: Arc::new(RuleBasedExpenseAnalyzer::new()),
            spending_predictor: Arc::new(spending_predictor),
            receipt_analyzer: Arc::new(MockReceiptAnalyzer::new()),
            metrics: init_metrics(),
            config,
        }
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.auth.clone()
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    AppError::InternalError(anyhow::anyhow!(detail)).into_response()
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors.allowed_origins);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/categories", get(handlers::get_categories))
        .route("/analyze-expense", post(handlers::analyze_expense))
        .route("/predict-spending", post(handlers::predict_spending))
        .route("/analyze-receipt", post(handlers::analyze_receipt))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        // Add metrics middleware
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AiConfig) -> Result<Self, AppError> {
        Self::with_state(AppState::new(config)).await
    }

    /// Build the application around an already assembled state.
    pub async fn with_state(state: AppState) -> Result<Self, AppError> {
        tracing::info!(
            expense_analyzer = state.expense_analyzer.name(),
            spending_predictor = state.spending_predictor.name(),
            receipt_analyzer = state.receipt_analyzer.name(),
            bearer_verification = state.config.auth.api_token.is_some(),
            "Initialized inference providers"
        );

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("AI service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
