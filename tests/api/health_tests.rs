//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
