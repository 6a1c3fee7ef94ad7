use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::middleware::BearerToken;
use crate::models::{
    ExpenseAnalysisRequest, ExpenseAnalysisResponse, ReceiptAnalysisRequest,
    ReceiptAnalysisResponse, SpendingPredictionRequest, SpendingPredictionResponse,
};
use crate::services::metrics;
use crate::startup::AppState;
use crate::utils::ValidatedJson;

/// Analyze an expense and provide insights
#[utoipa::path(
    post,
    path = "/analyze-expense",
    request_body = ExpenseAnalysisRequest,
    responses(
        (status = 200, description = "Expense analysed", body = ExpenseAnalysisResponse),
        (status = 403, description = "Missing bearer token"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Analysis failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Analysis"
)]
#[tracing::instrument(skip_all, fields(amount = request.amount))]
pub async fn analyze_expense(
    State(state): State<AppState>,
    _token: BearerToken,
    ValidatedJson(request): ValidatedJson<ExpenseAnalysisRequest>,
) -> Result<Json<ExpenseAnalysisResponse>, AppError> {
    let analyzer = &state.expense_analyzer;

    let result = analyzer
        .analyze(&request.description, request.amount)
        .await
        .map_err(|e| {
            metrics::record_provider_error(analyzer.name(), "analyze_expense");
            tracing::error!(provider = analyzer.name(), error = %e, "Expense analysis failed");
            AppError::from(e)
        })?;

    metrics::record_expense_analysis(
        analyzer.name(),
        &result.suggested_category,
        result.risk_level.as_str(),
    );
    tracing::info!(
        category = %result.suggested_category,
        confidence = result.confidence,
        risk_level = %result.risk_level,
        "Expense analysed"
    );

    Ok(Json(result))
}

/// Predict future spending based on historical data
#[utoipa::path(
    post,
    path = "/predict-spending",
    request_body = SpendingPredictionRequest,
    responses(
        (status = 200, description = "Daily forecast", body = SpendingPredictionResponse),
        (status = 403, description = "Missing bearer token"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Prediction failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Analysis"
)]
#[tracing::instrument(
    skip_all,
    fields(
        user_id = %request.user_id,
        records = request.historical_data.len(),
        days = request.prediction_days
    )
)]
pub async fn predict_spending(
    State(state): State<AppState>,
    _token: BearerToken,
    ValidatedJson(request): ValidatedJson<SpendingPredictionRequest>,
) -> Result<Json<SpendingPredictionResponse>, AppError> {
    let predictor = &state.spending_predictor;

    let result = predictor
        .predict(
            &request.user_id,
            &request.historical_data,
            request.prediction_days,
        )
        .await
        .map_err(|e| {
            metrics::record_provider_error(predictor.name(), "predict_spending");
            tracing::error!(provider = predictor.name(), error = %e, "Spending prediction failed");
            AppError::from(e)
        })?;

    metrics::record_spending_prediction(predictor.name(), !request.historical_data.is_empty());
    tracing::info!(
        predictions = result.predictions.len(),
        confidence = result.confidence,
        "Spending predicted"
    );

    Ok(Json(result))
}

/// Analyze a receipt image and extract its contents
#[utoipa::path(
    post,
    path = "/analyze-receipt",
    request_body = ReceiptAnalysisRequest,
    responses(
        (status = 200, description = "Receipt parsed", body = ReceiptAnalysisResponse),
        (status = 403, description = "Missing bearer token"),
        (status = 422, description = "Invalid request body"),
        (status = 500, description = "Receipt analysis failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Analysis"
)]
#[tracing::instrument(skip_all, fields(user_id = %request.user_id))]
pub async fn analyze_receipt(
    State(state): State<AppState>,
    _token: BearerToken,
    ValidatedJson(request): ValidatedJson<ReceiptAnalysisRequest>,
) -> Result<Json<ReceiptAnalysisResponse>, AppError> {
    let analyzer = &state.receipt_analyzer;

    let result = analyzer.analyze(&request.image_url).await.map_err(|e| {
        metrics::record_provider_error(analyzer.name(), "analyze_receipt");
        tracing::error!(provider = analyzer.name(), error = %e, "Receipt analysis failed");
        AppError::from(e)
    })?;

    metrics::record_receipt_analysis(analyzer.name());
    tracing::info!(
        merchant = %result.merchant,
        amount = result.amount,
        "Receipt analysed"
    );

    Ok(Json(result))
}
