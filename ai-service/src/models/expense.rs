use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ExpenseAnalysisRequest {
    #[schema(example = "Dinner at the corner restaurant")]
    pub description: String,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    #[schema(example = 42.5)]
    pub amount: f64,

    /// Category the user already picked, if any. Not used by the analysis.
    pub category: Option<String>,

    pub location: Option<Location>,

    #[schema(example = "2024-01-15")]
    pub date: Option<String>,
}

/// Where an expense happened. Every field is optional; unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub place_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpenseAnalysisResponse {
    #[schema(example = "Food & Dining")]
    pub suggested_category: String,
    #[schema(example = 0.85)]
    pub confidence: f64,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
}

/// Three-tier label derived from the expense amount alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Below 100 is low, below 500 is medium, anything else is high.
    pub fn from_amount(amount: f64) -> Self {
        if amount < 100.0 {
            RiskLevel::Low
        } else if amount < 500.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_boundaries() {
        assert_eq!(RiskLevel::from_amount(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_amount(99.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_amount(100.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_amount(499.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_amount(500.0), RiskLevel::High);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(RiskLevel::Medium).unwrap(),
            serde_json::json!("medium")
        );
    }

    #[test]
    fn negative_amount_fails_validation() {
        let request: ExpenseAnalysisRequest =
            serde_json::from_value(serde_json::json!({"description": "refund", "amount": -5.0}))
                .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn location_accepts_partial_and_unknown_keys() {
        let request: ExpenseAnalysisRequest = serde_json::from_value(serde_json::json!({
            "description": "coffee",
            "amount": 4.5,
            "location": {"city": "Lisbon", "placeName": "Cafe A", "floor": 2}
        }))
        .unwrap();

        let location = request.location.unwrap();
        assert_eq!(location.city.as_deref(), Some("Lisbon"));
        assert_eq!(location.place_name.as_deref(), Some("Cafe A"));
        assert!(location.latitude.is_none());
    }
}
