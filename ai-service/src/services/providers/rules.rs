//! Keyword and averaging rules standing in for trained models.

use super::{ExpenseAnalyzer, ProviderError, SpendingPredictor};
use crate::models::{
    DailyPrediction, ExpenseAnalysisResponse, HistoricalRecord, RiskLevel,
    SpendingPredictionResponse,
};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};

struct CategoryRule {
    keywords: &'static [&'static str],
    category: &'static str,
    confidence: f64,
}

/// Checked in order; the first rule with a keyword in the description wins.
const CATEGORY_RULES: [CategoryRule; 3] = [
    CategoryRule {
        keywords: &["food", "restaurant", "cafe", "meal"],
        category: "Food & Dining",
        confidence: 0.85,
    },
    CategoryRule {
        keywords: &["gas", "fuel", "transport"],
        category: "Transportation",
        confidence: 0.80,
    },
    CategoryRule {
        keywords: &["movie", "entertainment", "game"],
        category: "Entertainment",
        confidence: 0.75,
    },
];

const FALLBACK_CATEGORY: &str = "Other";
const FALLBACK_CONFIDENCE: f64 = 0.60;

/// Amounts strictly above this are reported as above average.
const AVERAGE_EXPENSE_AMOUNT: f64 = 50.0;

const RECOMMENDATIONS: [&str; 2] = [
    "Consider setting a budget for this category",
    "Track similar expenses to identify patterns",
];

/// Categorises expenses by keyword matching on the description.
#[derive(Debug, Default, Clone)]
pub struct RuleBasedExpenseAnalyzer;

impl RuleBasedExpenseAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn categorize(description: &str) -> (&'static str, f64) {
        let description = description.to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| description.contains(k)))
            .map(|rule| (rule.category, rule.confidence))
            .unwrap_or((FALLBACK_CATEGORY, FALLBACK_CONFIDENCE))
    }
}

#[async_trait]
impl ExpenseAnalyzer for RuleBasedExpenseAnalyzer {
    fn name(&self) -> &'static str {
        "keyword-rules"
    }

    async fn analyze(
        &self,
        description: &str,
        amount: f64,
    ) -> Result<ExpenseAnalysisResponse, ProviderError> {
        if !amount.is_finite() {
            return Err(ProviderError::InvalidInput(format!(
                "amount must be finite, got {}",
                amount
            )));
        }

        let (category, confidence) = Self::categorize(description);
        let comparison = if amount > AVERAGE_EXPENSE_AMOUNT {
            "above"
        } else {
            "below"
        };

        Ok(ExpenseAnalysisResponse {
            suggested_category: category.to_string(),
            confidence,
            insights: vec![
                format!("This appears to be a {} expense", category.to_lowercase()),
                format!(
                    "Amount ${:.2} is {} average for this category",
                    amount, comparison
                ),
            ],
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
            risk_level: RiskLevel::from_amount(amount),
        })
    }
}

const FORECAST_CONFIDENCE: f64 = 0.75;
const DAILY_GROWTH: f64 = 0.01;
const DAILY_CONFIDENCE_DECAY: f64 = 0.02;
const MIN_DAILY_CONFIDENCE: f64 = 0.5;

const FORECAST_FACTORS: [&str; 3] = [
    "Historical spending patterns",
    "Seasonal trends",
    "User behavior",
];

/// Projects the historical average forward with a small daily increase.
#[derive(Debug, Clone)]
pub struct AverageSpendingPredictor {
    start_date: NaiveDate,
}

impl AverageSpendingPredictor {
    /// `start_date` is the date attached to the first forecast day.
    pub fn new(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    fn average(history: &[HistoricalRecord]) -> f64 {
        let total: f64 = history.iter().map(|r| r.amount.unwrap_or(0.0)).sum();
        total / history.len() as f64
    }
}

#[async_trait]
impl SpendingPredictor for AverageSpendingPredictor {
    fn name(&self) -> &'static str {
        "historical-average"
    }

    async fn predict(
        &self,
        _user_id: &str,
        history: &[HistoricalRecord],
        days: u32,
    ) -> Result<SpendingPredictionResponse, ProviderError> {
        if history.is_empty() {
            return Ok(SpendingPredictionResponse {
                predictions: Vec::new(),
                confidence: 0.0,
                factors: vec!["No historical data available".to_string()],
            });
        }

        let average = Self::average(history);
        if !average.is_finite() {
            return Err(ProviderError::InvalidInput(
                "historical amounts overflow the average".to_string(),
            ));
        }

        let predictions = (0..days)
            .map(|day| {
                let date = self
                    .start_date
                    .checked_add_days(Days::new(u64::from(day)))
                    .ok_or_else(|| {
                        ProviderError::InvalidInput(format!(
                            "forecast day {} is past the supported calendar range",
                            day
                        ))
                    })?;
                let offset = f64::from(day);
                let predicted_amount = average * (1.0 + offset * DAILY_GROWTH);
                if !predicted_amount.is_finite() {
                    return Err(ProviderError::InvalidInput(format!(
                        "forecast for day {} overflows",
                        day
                    )));
                }

                Ok(DailyPrediction {
                    date: date.format("%Y-%m-%d").to_string(),
                    predicted_amount,
                    confidence: (1.0 - offset * DAILY_CONFIDENCE_DECAY).max(MIN_DAILY_CONFIDENCE),
                })
            })
            .collect::<Result<Vec<_>, ProviderError>>()?;

        Ok(SpendingPredictionResponse {
            predictions,
            confidence: FORECAST_CONFIDENCE,
            factors: FORECAST_FACTORS.iter().map(|f| f.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn record(amount: Option<f64>) -> HistoricalRecord {
        HistoricalRecord { amount }
    }

    fn predictor() -> AverageSpendingPredictor {
        AverageSpendingPredictor::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[tokio::test]
    async fn restaurant_is_food_and_dining() {
        let result = RuleBasedExpenseAnalyzer::new()
            .analyze("Dinner at a RESTAURANT", 40.0)
            .await
            .unwrap();

        assert_eq!(result.suggested_category, "Food & Dining");
        assert!(approx(result.confidence, 0.85));
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(
            result.insights,
            vec![
                "This appears to be a food & dining expense".to_string(),
                "Amount $40.00 is below average for this category".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn fuel_is_transportation() {
        let result = RuleBasedExpenseAnalyzer::new()
            .analyze("fuel top-up", 150.0)
            .await
            .unwrap();

        assert_eq!(result.suggested_category, "Transportation");
        assert!(approx(result.confidence, 0.80));
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(
            result.insights[1],
            "Amount $150.00 is above average for this category"
        );
    }

    #[tokio::test]
    async fn unmatched_description_falls_back_to_other() {
        let result = RuleBasedExpenseAnalyzer::new()
            .analyze("new laptop", 600.0)
            .await
            .unwrap();

        assert_eq!(result.suggested_category, "Other");
        assert!(approx(result.confidence, 0.60));
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn earlier_rule_wins_when_several_match() {
        let result = RuleBasedExpenseAnalyzer::new()
            .analyze("movie snacks and a meal", 20.0)
            .await
            .unwrap();

        assert_eq!(result.suggested_category, "Food & Dining");
    }

    #[tokio::test]
    async fn exactly_fifty_is_below_average() {
        let result = RuleBasedExpenseAnalyzer::new()
            .analyze("game", 50.0)
            .await
            .unwrap();

        assert_eq!(result.suggested_category, "Entertainment");
        assert_eq!(
            result.insights[1],
            "Amount $50.00 is below average for this category"
        );
        assert_eq!(result.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn empty_history_yields_no_predictions() {
        let result = predictor().predict("u1", &[], 30).await.unwrap();

        assert!(result.predictions.is_empty());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.factors, vec!["No historical data available".to_string()]);
    }

    #[tokio::test]
    async fn forecast_grows_from_historical_average() {
        let history = [record(Some(100.0)), record(Some(200.0))];
        let result = predictor().predict("u1", &history, 2).await.unwrap();

        assert_eq!(result.predictions.len(), 2);
        let day0 = &result.predictions[0];
        let day1 = &result.predictions[1];

        assert_eq!(day0.date, "2024-01-01");
        assert!(approx(day0.predicted_amount, 150.0));
        assert!(approx(day0.confidence, 1.0));

        assert_eq!(day1.date, "2024-01-02");
        assert!(approx(day1.predicted_amount, 151.5));
        assert!(approx(day1.confidence, 0.98));

        assert!(approx(result.confidence, 0.75));
        assert_eq!(result.factors.len(), 3);
    }

    #[tokio::test]
    async fn missing_amounts_count_as_zero() {
        let history = [record(Some(90.0)), record(None), record(None)];
        let result = predictor().predict("u1", &history, 1).await.unwrap();

        assert!(approx(result.predictions[0].predicted_amount, 30.0));
    }

    #[tokio::test]
    async fn confidence_bottoms_out_at_half() {
        let history = [record(Some(10.0))];
        let result = predictor().predict("u1", &history, 40).await.unwrap();

        assert!(approx(result.predictions[25].confidence, 0.5));
        assert!(approx(result.predictions[39].confidence, 0.5));
    }

    #[tokio::test]
    async fn dates_roll_over_month_end() {
        let history = [record(Some(10.0))];
        let result = predictor().predict("u1", &history, 33).await.unwrap();

        assert_eq!(result.predictions[30].date, "2024-01-31");
        assert_eq!(result.predictions[31].date, "2024-02-01");
        assert_eq!(result.predictions[32].date, "2024-02-02");
    }

    #[tokio::test]
    async fn overflowing_history_is_rejected() {
        let history = [record(Some(1.5e308)), record(Some(1.5e308))];
        let result = predictor().predict("u1", &history, 1).await;

        assert!(matches!(result, Err(ProviderError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn growth_past_f64_range_is_rejected() {
        let history = [record(Some(1.7e308))];
        let result = predictor().predict("u1", &history, 30).await;

        assert!(matches!(result, Err(ProviderError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn zero_days_yields_empty_forecast_with_factors() {
        let history = [record(Some(10.0))];
        let result = predictor().predict("u1", &history, 0).await.unwrap();

        assert!(result.predictions.is_empty());
        assert!(approx(result.confidence, 0.75));
    }
}
