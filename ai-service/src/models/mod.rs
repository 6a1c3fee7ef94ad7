pub mod category;
pub mod expense;
pub mod prediction;
pub mod receipt;

pub use category::{Category, CategoryList, CATEGORIES};
pub use expense::{ExpenseAnalysisRequest, ExpenseAnalysisResponse, Location, RiskLevel};
pub use prediction::{
    DailyPrediction, HistoricalRecord, SpendingPredictionRequest, SpendingPredictionResponse,
};
pub use receipt::{ReceiptAnalysisRequest, ReceiptAnalysisResponse, ReceiptItem};
