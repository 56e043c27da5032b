//! User Handlers
//!
//! Friendships, user search, and user lookup.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{FriendRequest, SearchQuery};
use crate::application::dto::response::UserResponse;
use crate::presentation::http::extractors::BearerToken;
use crate::shared::error::DomainError;
use crate::startup::AppState;

/// Add a friend (creates the undirected edge)
pub async fn add_friend(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Json(body): Json<FriendRequest>,
) -> Result<StatusCode, DomainError> {
    state
        .user_service
        .add_friend(token.as_deref(), body.friend_id.as_deref())
        .await?;

    Ok(StatusCode::CREATED)
}

/// Remove a friend (deletes the edge in either stored order)
pub async fn remove_friend(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Json(body): Json<FriendRequest>,
) -> Result<StatusCode, DomainError> {
    state
        .user_service
        .remove_friend(token.as_deref(), body.friend_id.as_deref())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the friends of a user
pub async fn list_friends(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserResponse>>, DomainError> {
    let friends = state
        .user_service
        .list_friends(token.as_deref(), Some(&user_id))
        .await?;

    Ok(Json(friends.into_iter().map(UserResponse::from).collect()))
}

/// Search users by name
pub async fn search_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<UserResponse>>, DomainError> {
    let users = state
        .user_service
        .search_users(token.as_deref(), query.q.as_deref())
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by id
pub async fn get_user(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, DomainError> {
    let user = state
        .user_service
        .get_user(token.as_deref(), Some(&user_id))
        .await?;

    Ok(Json(UserResponse::from(user)))
}
