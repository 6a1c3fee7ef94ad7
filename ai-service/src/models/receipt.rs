use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReceiptAnalysisRequest {
    #[schema(example = "https://cdn.example.com/receipts/123.jpg")]
    pub image_url: String,
    #[schema(example = "user-123")]
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReceiptItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReceiptAnalysisResponse {
    #[schema(example = 45.67)]
    pub amount: f64,
    #[schema(example = "Sample Store")]
    pub merchant: String,
    #[schema(example = "Shopping")]
    pub category: String,
    #[schema(example = "2024-01-15")]
    pub date: String,
    pub items: Vec<ReceiptItem>,
    #[schema(example = 0.85)]
    pub confidence: f64,
}
