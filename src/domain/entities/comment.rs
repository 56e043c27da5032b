//! Comment entity and repository trait.
//!
//! Unlike likes, a user may leave any number of comments on a post.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::DomainError;

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Comment text
    pub content: String,

    /// Commenting user
    pub user_id: i64,

    /// Commented post
    pub post_id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Repository trait for comment data access.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment.
    async fn create(&self, comment: &Comment) -> Result<Comment, DomainError>;

    /// All comments on a post, oldest first.
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError>;
}
