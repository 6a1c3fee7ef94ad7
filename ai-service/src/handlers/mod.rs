//! HTTP handlers for ai-service.

pub mod analysis;
pub mod categories;
pub mod health;
pub mod metrics;

pub use analysis::{analyze_expense, analyze_receipt, predict_spending};
pub use categories::get_categories;
pub use health::{health_check, readiness_check, root};
pub use self::metrics::metrics;
