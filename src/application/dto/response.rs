//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{CommentDto, PostDto, UserSummaryDto};

/// Bearer token response, returned by signup and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

impl From<String> for TokenResponse {
    fn from(token: String) -> Self {
        Self { token }
    }
}

/// User summary response (never carries the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<UserSummaryDto> for UserResponse {
    fn from(dto: UserSummaryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub photo: String,
    pub description: String,

    #[serde(rename = "type")]
    pub post_type: String,

    pub created_at: String,
    pub author_id: String,
}

impl From<PostDto> for PostResponse {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            photo: dto.photo,
            description: dto.description,
            post_type: dto.post_type,
            created_at: dto.created_at,
            author_id: dto.author_id,
        }
    }
}

/// Comment response
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub comment: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: String,
}

impl From<CommentDto> for CommentResponse {
    fn from(dto: CommentDto) -> Self {
        Self {
            id: dto.id,
            comment: dto.comment,
            user_id: dto.user_id,
            post_id: dto.post_id,
            created_at: dto.created_at,
        }
    }
}
