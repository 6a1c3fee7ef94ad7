use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Longest forecast horizon accepted, in days.
pub const MAX_PREDICTION_DAYS: u32 = 365;

fn default_prediction_days() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SpendingPredictionRequest {
    #[schema(example = "user-123")]
    pub user_id: String,

    pub historical_data: Vec<HistoricalRecord>,

    #[serde(default = "default_prediction_days")]
    #[validate(range(max = 365, message = "prediction_days must be at most 365"))]
    #[schema(example = 30)]
    pub prediction_days: u32,
}

/// One past spending entry. Only `amount` feeds the forecast; a missing
/// amount counts as zero. Any other keys, whatever their shape, are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct HistoricalRecord {
    #[schema(example = 120.0)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyPrediction {
    #[schema(example = "2024-01-01")]
    pub date: String,
    #[schema(example = 150.0)]
    pub predicted_amount: f64,
    #[schema(example = 1.0)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpendingPredictionResponse {
    pub predictions: Vec<DailyPrediction>,
    #[schema(example = 0.75)]
    pub confidence: f64,
    pub factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_days_defaults_to_thirty() {
        let request: SpendingPredictionRequest = serde_json::from_value(serde_json::json!({
            "user_id": "u1",
            "historical_data": []
        }))
        .unwrap();
        assert_eq!(request.prediction_days, 30);
    }

    #[test]
    fn horizon_above_limit_fails_validation() {
        let request: SpendingPredictionRequest = serde_json::from_value(serde_json::json!({
            "user_id": "u1",
            "historical_data": [],
            "prediction_days": MAX_PREDICTION_DAYS + 1
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn record_without_amount_deserializes() {
        let record: HistoricalRecord =
            serde_json::from_value(serde_json::json!({"merchant": "Grocer"})).unwrap();
        assert!(record.amount.is_none());
    }

    #[test]
    fn record_ignores_shape_of_other_keys() {
        let record: HistoricalRecord = serde_json::from_value(serde_json::json!({
            "amount": 12.5,
            "category": {"id": "food", "name": "Food & Dining"},
            "date": 1704067200
        }))
        .unwrap();
        assert_eq!(record.amount, Some(12.5));
    }
}
