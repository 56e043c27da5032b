//! Like Repository Implementation
//!
//! PostgreSQL implementation of the LikeRepository trait. The
//! `(user_id, post_id)` unique constraint backs the two-state toggle.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Like, LikeRepository, User};
use crate::shared::error::DomainError;

#[derive(Debug, sqlx::FromRow)]
struct LikerRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl LikerRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}

/// PostgreSQL like repository implementation.
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn create(&self, like: &Like) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO likes (id, user_id, post_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(like.id)
        .bind(like.user_id)
        .bind(like.post_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::DuplicateLike
            }
            _ => DomainError::Database(e),
        })?;

        Ok(())
    }

    async fn delete(&self, user_id: i64, post_id: i64) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn exists(&self, user_id: i64, post_id: i64) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM likes
                WHERE user_id = $1 AND post_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_likers(&self, post_id: i64) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query_as::<_, LikerRow>(
            r#"
            SELECT u.id, u.name, u.email, u.password_hash, u.created_at
            FROM likes l
            JOIN users u ON u.id = l.user_id
            WHERE l.post_id = $1
            ORDER BY l.id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }
}
