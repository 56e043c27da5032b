//! Post Handlers
//!
//! Posts, the feed, likes, and comments.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CommentRequest, CreatePostRequest, FeedQuery};
use crate::application::dto::response::{CommentResponse, PostResponse, UserResponse};
use crate::application::services::CreatePostInput;
use crate::presentation::http::extractors::BearerToken;
use crate::shared::error::DomainError;
use crate::startup::AppState;

/// Create a post authored by the caller
pub async fn create_post(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Json(body): Json<CreatePostRequest>,
) -> Result<StatusCode, DomainError> {
    state
        .post_service
        .create_post(
            token.as_deref(),
            CreatePostInput {
                photo: body.photo,
                description: body.description,
                post_type: body.post_type,
            },
        )
        .await?;

    Ok(StatusCode::CREATED)
}

/// The paginated feed, newest-first
pub async fn list_posts(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<PostResponse>>, DomainError> {
    let posts = state
        .post_service
        .list_posts(token.as_deref(), query.page, query.size)
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Get a post by id
pub async fn get_post(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(post_id): Path<String>,
) -> Result<Json<PostResponse>, DomainError> {
    let post = state
        .post_service
        .get_post(token.as_deref(), Some(&post_id))
        .await?;

    Ok(Json(PostResponse::from(post)))
}

/// Like a post
pub async fn like_post(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(post_id): Path<String>,
) -> Result<StatusCode, DomainError> {
    state
        .post_service
        .like_post(token.as_deref(), Some(&post_id))
        .await?;

    Ok(StatusCode::CREATED)
}

/// Remove the caller's like from a post
pub async fn deslike_post(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(post_id): Path<String>,
) -> Result<StatusCode, DomainError> {
    state
        .post_service
        .deslike_post(token.as_deref(), Some(&post_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Who liked a post
pub async fn get_likes(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<UserResponse>>, DomainError> {
    let likers = state
        .post_service
        .get_likes(token.as_deref(), Some(&post_id))
        .await?;

    Ok(Json(likers.into_iter().map(UserResponse::from).collect()))
}

/// Comment on a post
pub async fn comment_on_post(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(post_id): Path<String>,
    Json(body): Json<CommentRequest>,
) -> Result<StatusCode, DomainError> {
    state
        .post_service
        .comment_on_post(token.as_deref(), Some(&post_id), body.comment.as_deref())
        .await?;

    Ok(StatusCode::CREATED)
}

/// All comments on a post
pub async fn get_comments(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, DomainError> {
    let comments = state
        .post_service
        .get_comments(token.as_deref(), Some(&post_id))
        .await?;

    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}
