//! Friendship Repository Implementation
//!
//! PostgreSQL implementation of the FriendshipRepository trait. Edges are
//! stored as ordered `(user_id, friend_id)` rows but every query matches
//! both orders; the `friendships_pair_key` unique index over
//! `(LEAST, GREATEST)` keeps one row per unordered pair.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Friendship, FriendshipRepository, User};
use crate::shared::error::DomainError;

#[derive(Debug, sqlx::FromRow)]
struct FriendUserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl FriendUserRow {
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

/// PostgreSQL friendship repository implementation.
#[derive(Clone)]
pub struct PgFriendshipRepository {
    pool: PgPool,
}

impl PgFriendshipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    async fn create(&self, friendship: &Friendship) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO friendships (id, user_id, friend_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(friendship.id)
        .bind(friendship.user_id)
        .bind(friendship.friend_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::AlreadyFriends
            }
            _ => DomainError::Database(e),
        })?;

        Ok(())
    }

    async fn delete_pair(&self, a: i64, b: i64) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM friendships
            WHERE (user_id = $1 AND friend_id = $2)
               OR (user_id = $2 AND friend_id = $1)
            "#,
        )
        .bind(a)
        .bind(b)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn pair_exists(&self, a: i64, b: i64) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM friendships
                WHERE (user_id = $1 AND friend_id = $2)
                   OR (user_id = $2 AND friend_id = $1)
            )
            "#,
        )
        .bind(a)
        .bind(b)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_friends_of(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        // For each edge touching the user, join on the other endpoint
        let rows = sqlx::query_as::<_, FriendUserRow>(
            r#"
            SELECT u.id, u.name, u.email, u.password_hash, u.created_at
            FROM friendships f
            JOIN users u
              ON u.id = CASE WHEN f.user_id = $1 THEN f.friend_id ELSE f.user_id END
            WHERE f.user_id = $1 OR f.friend_id = $1
            ORDER BY u.name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }
}
