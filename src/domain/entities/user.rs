//! User entity and repository trait.
//!
//! Maps to the `users` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::DomainError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - name: VARCHAR(255) NOT NULL
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Accounts are immutable after signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Display name; searched by case-insensitive substring
    pub name: String,

    /// Email address (unique)
    pub email: String,

    /// Argon2 password hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Repository trait for user data access.
///
/// Defined in the domain layer to keep dependency inversion: the
/// PostgreSQL implementation lives in the infrastructure layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. The unique email constraint maps onto
    /// `DomainError::DuplicateEmail`.
    async fn create(&self, user: &User) -> Result<User, DomainError>;

    /// Find a user by their Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Case-insensitive substring search on the user name.
    async fn search_by_name(&self, term: &str) -> Result<Vec<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            password_hash: "argon2-hash".into(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2-hash"));
        assert!(!json.contains("password_hash"));
    }
}
