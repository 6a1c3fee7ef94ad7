//! Integration tests for the category catalog.

mod common;

use axum::http::StatusCode;
use common::{get, test_app};
use serde_json::json;

#[tokio::test]
async fn categories_returns_nine_entries_in_order() {
    let response = get(test_app(), "/categories").await;

    assert_eq!(response.status, StatusCode::OK);
    let categories = response.body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 9);

    let ids: Vec<_> = categories.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec![
            "food",
            "transport",
            "entertainment",
            "shopping",
            "utilities",
            "health",
            "education",
            "travel",
            "other"
        ]
    );
    assert_eq!(
        categories[0],
        json!({"id": "food", "name": "Food & Dining", "icon": "🍽️"})
    );
}

#[tokio::test]
async fn categories_are_idempotent() {
    let app = test_app();
    let first = get(app.clone(), "/categories").await;
    let second = get(app, "/categories").await;

    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn categories_need_no_token() {
    let response = get(test_app(), "/categories").await;

    assert_eq!(response.status, StatusCode::OK);
}
