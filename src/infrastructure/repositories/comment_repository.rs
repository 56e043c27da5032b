//! Comment Repository Implementation
//!
//! PostgreSQL implementation of the CommentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Comment, CommentRepository};
use crate::shared::error::DomainError;

/// Database row representation matching the `comments` table schema.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    user_id: i64,
    post_id: i64,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            content: self.content,
            user_id: self.user_id,
            post_id: self.post_id,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (id, content, user_id, post_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, user_id, post_id, created_at
            "#,
        )
        .bind(comment.id)
        .bind(&comment.content)
        .bind(comment.user_id)
        .bind(comment.post_id)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_comment())
    }

    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, content, user_id, post_id, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }
}
