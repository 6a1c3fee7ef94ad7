//! OpenAPI document served at `/openapi.json`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{handlers, models};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ControlSpending AI Service",
        description = "AI-powered expense analysis and insights"
    ),
    paths(
        handlers::health::root,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::categories::get_categories,
        handlers::analysis::analyze_expense,
        handlers::analysis::predict_spending,
        handlers::analysis::analyze_receipt,
    ),
    components(schemas(
        models::ExpenseAnalysisRequest,
        models::ExpenseAnalysisResponse,
        models::Location,
        models::RiskLevel,
        models::SpendingPredictionRequest,
        models::SpendingPredictionResponse,
        models::HistoricalRecord,
        models::DailyPrediction,
        models::ReceiptAnalysisRequest,
        models::ReceiptAnalysisResponse,
        models::ReceiptItem,
        models::Category,
        models::CategoryList,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Analysis", description = "Rule-based expense, spending and receipt analysis"),
        (name = "Catalog", description = "Static reference data"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}
