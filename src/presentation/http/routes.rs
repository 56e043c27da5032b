//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest("/posts", post_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
}

/// User and friendship routes (token-checked inside the services)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/friends",
            post(handlers::user::add_friend).delete(handlers::user::remove_friend),
        )
        .route("/search", get(handlers::user::search_users))
        .route("/{user_id}", get(handlers::user::get_user))
        .route("/{user_id}/friends", get(handlers::user::list_friends))
}

/// Post, like and comment routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::post::create_post).get(handlers::post::list_posts),
        )
        .route("/{post_id}", get(handlers::post::get_post))
        .route(
            "/{post_id}/like",
            post(handlers::post::like_post).delete(handlers::post::deslike_post),
        )
        .route("/{post_id}/likes", get(handlers::post::get_likes))
        .route(
            "/{post_id}/comments",
            post(handlers::post::comment_on_post).get(handlers::post::get_comments),
        )
}
