//! Routing and Authentication-Surface Tests
//!
//! Every operation beyond signup/login verifies the caller's token
//! before anything else, so a missing or garbage token must come back
//! as 401 on every protected route.

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = TestApp::new();

    for uri in [
        "/api/v1/posts",
        "/api/v1/posts/1",
        "/api/v1/posts/1/likes",
        "/api/v1/posts/1/comments",
        "/api/v1/users/search?q=ana",
        "/api/v1/users/1",
        "/api/v1/users/1/friends",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "uri: {}", uri);
    }

    let response = app.post_json("/api/v1/users/friends", r#"{"friend_id": "1"}"#).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected_with_401() {
    let app = TestApp::new();

    let response = app
        .post_json_auth("/api/v1/posts", r#"{}"#, "not-a-jwt")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "unauthenticated");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = TestApp::new();

    let response = app.get("/api/v1/nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
