//! Request DTOs
//!
//! Data structures for API request bodies and query strings. Fields are
//! optional on purpose: an absent field must reach the domain services,
//! which surface the matching `Missing*` error, instead of failing at
//! deserialization.

use serde::Deserialize;

/// Signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Add/remove friend request
#[derive(Debug, Deserialize)]
pub struct FriendRequest {
    pub friend_id: Option<String>,
}

/// Create post request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub photo: Option<String>,
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub post_type: Option<String>,
}

/// Comment request
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: Option<String>,
}

/// Feed pagination query
#[derive(Debug, Deserialize, Default)]
pub struct FeedQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// User search query
#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}
