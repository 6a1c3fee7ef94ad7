//! Placeholder receipt OCR.

use super::{ProviderError, ReceiptAnalyzer};
use crate::models::{ReceiptAnalysisResponse, ReceiptItem};
use async_trait::async_trait;

/// Returns the same sample receipt for every image. The image is never
/// fetched.
#[derive(Debug, Default, Clone)]
pub struct MockReceiptAnalyzer;

impl MockReceiptAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn sample_receipt() -> ReceiptAnalysisResponse {
        ReceiptAnalysisResponse {
            amount: 45.67,
            merchant: "Sample Store".to_string(),
            category: "Shopping".to_string(),
            date: "2024-01-15".to_string(),
            items: vec![
                ReceiptItem {
                    name: "Item 1".to_string(),
                    price: 25.99,
                },
                ReceiptItem {
                    name: "Item 2".to_string(),
                    price: 19.68,
                },
            ],
            confidence: 0.85,
        }
    }
}

#[async_trait]
impl ReceiptAnalyzer for MockReceiptAnalyzer {
    fn name(&self) -> &'static str {
        "mock-ocr"
    }

    async fn analyze(&self, _image_url: &str) -> Result<ReceiptAnalysisResponse, ProviderError> {
        Ok(Self::sample_receipt())
    }
}
