//! Auth Service
//!
//! Signup and login: the only operations that do not require a caller
//! token, and the only issuers of one. Validation runs as an ordered
//! chain; the first failing check aborts the operation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{User, UserRepository};
use crate::shared::error::DomainError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::required;

use super::password::PasswordManager;
use super::token_manager::TokenManager;

/// Signup input record, as handed over by the transport layer.
///
/// Fields are optional because an absent JSON field must surface as the
/// matching `Missing*` domain error, not as a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login input record.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Auth service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a new account and return a fresh bearer token for it.
    async fn signup(&self, input: SignupInput) -> Result<String, DomainError>;

    /// Authenticate with credentials and return a fresh bearer token.
    async fn login(&self, input: LoginInput) -> Result<String, DomainError>;
}

/// AuthService implementation
pub struct AuthServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenManager>,
    passwords: Arc<PasswordManager>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<U> AuthServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        tokens: Arc<TokenManager>,
        passwords: Arc<PasswordManager>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            tokens,
            passwords,
            id_generator,
        }
    }
}

#[async_trait]
impl<U> AuthService for AuthServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn signup(&self, input: SignupInput) -> Result<String, DomainError> {
        let name = required(input.name.as_deref(), DomainError::MissingName)?;
        let email = required(input.email.as_deref(), DomainError::MissingEmail)?;
        let password = required(input.password.as_deref(), DomainError::MissingPassword)?;

        if password.len() < 6 {
            return Err(DomainError::WeakPassword);
        }

        if !email.contains('@') {
            return Err(DomainError::InvalidEmail);
        }

        // Advisory fast-fail; the unique email constraint in the store is
        // authoritative and maps onto the same error.
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(DomainError::DuplicateEmail);
        }

        let password_hash = self.passwords.hash(password)?;

        let user = User {
            id: self.id_generator.generate(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.user_repo.create(&user).await?;
        tracing::info!(user_id = created.id, "Account created");

        self.tokens.issue(created.id)
    }

    async fn login(&self, input: LoginInput) -> Result<String, DomainError> {
        let email = required(input.email.as_deref(), DomainError::MissingEmail)?;
        let password = required(input.password.as_deref(), DomainError::MissingPassword)?;

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(DomainError::EmailNotFound)?;

        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(DomainError::WrongPassword);
        }

        self.tokens.issue(user.id)
    }
}
