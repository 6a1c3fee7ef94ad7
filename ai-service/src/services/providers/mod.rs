//! Inference provider abstractions and implementations.
//!
//! Each analysis endpoint talks to one trait object, so a learned model can
//! replace the rule-based implementations without touching the HTTP layer.

pub mod mock;
pub mod rules;

use crate::models::{ExpenseAnalysisResponse, HistoricalRecord, ReceiptAnalysisResponse, SpendingPredictionResponse};
use async_trait::async_trait;
use thiserror::Error;

pub use mock::MockReceiptAnalyzer;
pub use rules::{AverageSpendingPredictor, RuleBasedExpenseAnalyzer};

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Suggests a category, insights and a risk level for a single expense.
#[async_trait]
pub trait ExpenseAnalyzer: Send + Sync {
    /// Short provider name used in logs and metrics.
    fn name(&self) -> &'static str;

    async fn analyze(
        &self,
        description: &str,
        amount: f64,
    ) -> Result<ExpenseAnalysisResponse, ProviderError>;

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Forecasts daily spending from past records.
#[async_trait]
pub trait SpendingPredictor: Send + Sync {
    fn name(&self) -> &'static str;

    async fn predict(
        &self,
        user_id: &str,
        history: &[HistoricalRecord],
        days: u32,
    ) -> Result<SpendingPredictionResponse, ProviderError>;

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Extracts merchant, total and line items from a receipt image.
#[async_trait]
pub trait ReceiptAnalyzer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, image_url: &str) -> Result<ReceiptAnalysisResponse, ProviderError>;

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

impl From<ProviderError> for service_core::error::AppError {
    fn from(err: ProviderError) -> Self {
        service_core::error::AppError::InternalError(anyhow::Error::new(err))
    }
}
