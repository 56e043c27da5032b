//! Post entity and repository trait.
//!
//! Maps to the `posts` table. Posts are immutable after creation; the
//! feed lists them newest-first with limit/offset pagination.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::DomainError;

/// Post type matching the database VARCHAR CHECK constraint.
///
/// Unknown strings are rejected rather than defaulted: an out-of-range
/// type in a request is a contract error (`InvalidPostType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Normal,
    Event,
}

impl PostType {
    /// Parse from the wire/database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "event" => Some(Self::Event),
            _ => None,
        }
    }

    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Event => "event",
        }
    }
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a post in the feed.
///
/// Maps to the `posts` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - photo_url: TEXT NOT NULL
/// - description: TEXT NOT NULL
/// - post_type: VARCHAR(10) CHECK IN ('normal', 'event')
/// - created_at: TIMESTAMPTZ NOT NULL (server-assigned)
/// - author_id: BIGINT NOT NULL REFERENCES users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Photo reference
    pub photo_url: String,

    /// Free-text description
    pub description: String,

    /// Post kind
    pub post_type: PostType,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,

    /// Author (the authenticated caller at creation time)
    pub author_id: i64,
}

/// Repository trait for post data access.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post.
    async fn create(&self, post: &Post) -> Result<Post, DomainError>;

    /// Find a post by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;

    /// List posts newest-first with the given limit/offset.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_type_parse() {
        assert_eq!(PostType::parse("normal"), Some(PostType::Normal));
        assert_eq!(PostType::parse("event"), Some(PostType::Event));
        assert_eq!(PostType::parse("story"), None);
        // Strict: no case folding, no defaulting
        assert_eq!(PostType::parse("Normal"), None);
        assert_eq!(PostType::parse(""), None);
    }

    #[test]
    fn test_post_type_as_str() {
        assert_eq!(PostType::Normal.as_str(), "normal");
        assert_eq!(PostType::Event.as_str(), "event");
    }
}
