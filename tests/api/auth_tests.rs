//! Authentication API Tests
//!
//! Signup and login validation runs before any query, so these tests
//! exercise the full HTTP surface without a live database.

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn signup_with_empty_body_reports_missing_name() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/auth/signup", "{}").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation");
    assert_eq!(body["message"], "Provide the user name.");
}

#[tokio::test]
async fn signup_checks_fire_in_order() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/auth/signup", r#"{"name": "Ana"}"#)
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "Provide the email.");

    let response = app
        .post_json(
            "/api/v1/auth/signup",
            r#"{"name": "Ana", "email": "ana@x.com"}"#,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "Provide the password.");
}

#[tokio::test]
async fn signup_rejects_short_password() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/auth/signup",
            r#"{"name": "Ana", "email": "ana@x.com", "password": "123"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["message"],
        "The password must have at least 6 characters."
    );
}

#[tokio::test]
async fn signup_rejects_email_without_at_sign() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/v1/auth/signup",
            r#"{"name": "Ana", "email": "not-an-email", "password": "secret1"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "Invalid email format.");
}

#[tokio::test]
async fn login_with_empty_body_reports_missing_email() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/auth/login", "{}").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["message"], "Provide the email.");
}

#[tokio::test]
async fn blank_fields_count_as_absent() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/auth/signup", r#"{"name": "   "}"#)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["message"],
        "Provide the user name."
    );
}
