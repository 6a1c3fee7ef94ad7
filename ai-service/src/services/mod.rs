pub mod metrics;
pub mod providers;

pub use providers::{
    AverageSpendingPredictor, ExpenseAnalyzer, MockReceiptAnalyzer, ProviderError,
    ReceiptAnalyzer, RuleBasedExpenseAnalyzer, SpendingPredictor,
};
