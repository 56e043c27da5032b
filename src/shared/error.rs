//! Domain Error Taxonomy
//!
//! Every failure a domain service can surface, classified by category and
//! mapped onto HTTP responses for the transport layer. Checks fail fast:
//! the first failing check aborts the operation, so the variant that fires
//! is part of each operation's contract.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Status category the transport maps to a protocol-level status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Required input absent or malformed.
    Validation,
    /// Referenced entity absent, or a listing the caller expected content from was empty.
    NotFound,
    /// Uniqueness violation (email, friendship pair, like pair).
    Conflict,
    /// Bearer token missing, malformed, or rejected.
    Unauthenticated,
    /// Store or server failure; details are logged, not surfaced.
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not-found",
            Self::Conflict => "conflict",
            Self::Unauthenticated => "unauthenticated",
            Self::Internal => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Domain error type shared by all services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    // Signup / login
    #[error("Provide the user name.")]
    MissingName,

    #[error("Provide the email.")]
    MissingEmail,

    #[error("Provide the password.")]
    MissingPassword,

    #[error("The password must have at least 6 characters.")]
    WeakPassword,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("E-mail already in use.")]
    DuplicateEmail,

    #[error("Email not found.")]
    EmailNotFound,

    #[error("Incorrect password.")]
    WrongPassword,

    // Friendships
    #[error("Provide the friend id.")]
    MissingFriendId,

    #[error("Friend id not found.")]
    FriendNotFound,

    #[error("A user cannot befriend themself.")]
    SelfFriendship,

    #[error("These users are already friends.")]
    AlreadyFriends,

    #[error("These users are not friends.")]
    NotFriends,

    #[error("The user has no friends yet.")]
    NoFriends,

    // Users
    #[error("Provide the user id.")]
    MissingUserId,

    #[error("User id not found.")]
    UserNotFound,

    #[error("Provide a search term.")]
    MissingSearchTerm,

    #[error("No users matched the search term.")]
    NoUsersFound,

    // Posts
    #[error("Provide the photo url.")]
    MissingPhoto,

    #[error("Provide the description.")]
    MissingDescription,

    #[error("Provide the post type.")]
    MissingPostType,

    #[error("The post type must be either \"normal\" or \"event\".")]
    InvalidPostType,

    #[error("Provide the post id.")]
    MissingPostId,

    #[error("Post id not found.")]
    PostNotFound,

    // Likes
    #[error("The user has already liked this post.")]
    DuplicateLike,

    #[error("The user has not liked this post.")]
    NotLiked,

    #[error("The post has no likes yet.")]
    NoLikes,

    // Comments
    #[error("Provide the comment text.")]
    MissingComment,

    #[error("The post has no comments yet.")]
    NoComments,

    // Auth / infrastructure
    #[error("Unauthorized: {0}")]
    Unauthenticated(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Classify the error for the transport layer.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName
            | Self::MissingEmail
            | Self::MissingPassword
            | Self::WeakPassword
            | Self::InvalidEmail
            | Self::WrongPassword
            | Self::MissingFriendId
            | Self::SelfFriendship
            | Self::NotFriends
            | Self::MissingUserId
            | Self::MissingSearchTerm
            | Self::MissingPhoto
            | Self::MissingDescription
            | Self::MissingPostType
            | Self::InvalidPostType
            | Self::MissingPostId
            | Self::NotLiked
            | Self::MissingComment => ErrorCategory::Validation,

            Self::EmailNotFound
            | Self::FriendNotFound
            | Self::UserNotFound
            | Self::PostNotFound
            | Self::NoFriends
            | Self::NoUsersFound
            | Self::NoLikes
            | Self::NoComments => ErrorCategory::NotFound,

            Self::DuplicateEmail | Self::AlreadyFriends | Self::DuplicateLike => {
                ErrorCategory::Conflict
            }

            Self::Unauthenticated(_) => ErrorCategory::Unauthenticated,

            Self::Database(_) | Self::Internal(_) => ErrorCategory::Internal,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let category = self.category();

        let message = match &self {
            DomainError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            DomainError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: category.as_str(),
            message,
        };

        (category.status_code(), Json(body)).into_response()
    }
}
