//! Post Repository Implementation
//!
//! PostgreSQL implementation of the PostRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Post, PostRepository, PostType};
use crate::shared::error::DomainError;

/// Database row representation matching the `posts` table schema.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    photo_url: String,
    description: String,
    post_type: String,
    created_at: DateTime<Utc>,
    author_id: i64,
}

impl PostRow {
    /// The schema CHECK keeps the stored type in range; a row that
    /// escapes it is corrupt and surfaces as an internal error.
    fn into_post(self) -> Result<Post, DomainError> {
        let post_type = PostType::parse(&self.post_type).ok_or_else(|| {
            DomainError::Internal(format!("Unknown post type in store: {}", self.post_type))
        })?;

        Ok(Post {
            id: self.id,
            photo_url: self.photo_url,
            description: self.description,
            post_type,
            created_at: self.created_at,
            author_id: self.author_id,
        })
    }
}

/// PostgreSQL post repository implementation.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, photo_url, description, post_type, created_at, author_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, photo_url, description, post_type, created_at, author_id
            "#,
        )
        .bind(post.id)
        .bind(&post.photo_url)
        .bind(&post.description)
        .bind(post.post_type.as_str())
        .bind(post.created_at)
        .bind(post.author_id)
        .fetch_one(&self.pool)
        .await?;

        row.into_post()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, photo_url, description, post_type, created_at, author_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_post()).transpose()
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, photo_url, description, post_type, created_at, author_id
            FROM posts
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_post()).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row(post_type: &str) -> PostRow {
        PostRow {
            id: 1,
            photo_url: "p.jpg".into(),
            description: "hi".into(),
            post_type: post_type.into(),
            created_at: Utc::now(),
            author_id: 2,
        }
    }

    #[test]
    fn row_conversion_keeps_the_stored_type() {
        let post = row("event").into_post().unwrap();
        assert_eq!(post.post_type, PostType::Event);
    }

    #[test]
    fn corrupt_stored_type_is_an_internal_error() {
        assert!(matches!(
            row("story").into_post(),
            Err(DomainError::Internal(_))
        ));
    }
}
