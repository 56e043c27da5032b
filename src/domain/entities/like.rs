//! Like entity and repository trait.
//!
//! A like is a two-state toggle per `(user, post)` pair: the `likes`
//! table holds at most one row per pair, enforced by a unique constraint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::shared::error::DomainError;

/// One user's like on one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// The liking user
    pub user_id: i64,

    /// The liked post
    pub post_id: i64,
}

/// Repository trait for like data access.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like. The `(user_id, post_id)` unique constraint maps onto
    /// `DomainError::DuplicateLike`.
    async fn create(&self, like: &Like) -> Result<(), DomainError>;

    /// Delete the caller's like on a post. Returns the number of rows
    /// removed (0 when no like existed).
    async fn delete(&self, user_id: i64, post_id: i64) -> Result<u64, DomainError>;

    /// Direct uniqueness lookup for the pair.
    async fn exists(&self, user_id: i64, post_id: i64) -> Result<bool, DomainError>;

    /// The users who liked a post, via a join with `users`.
    async fn find_likers(&self, post_id: i64) -> Result<Vec<User>, DomainError>;
}
