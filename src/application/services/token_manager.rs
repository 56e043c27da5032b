//! Token Manager
//!
//! The identity verifier: issues JWT bearer tokens at signup/login and
//! resolves the caller's user id at the start of every service operation.
//! Built once at startup and injected into each service.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::shared::error::DomainError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// JWT ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Stateless JWT issue/verify service.
pub struct TokenManager {
    settings: JwtSettings,
}

impl TokenManager {
    /// Create a new TokenManager from JWT settings.
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// Issue a fresh bearer token for a user id.
    pub fn issue(&self, user_id: i64) -> Result<String, DomainError> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.settings.access_token_expiry_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
            jti: Some(uuid::Uuid::new_v4().to_string()),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.secret.as_bytes()),
        )
        .map_err(|e| DomainError::Internal(format!("Token generation failed: {}", e)))
    }

    /// Validate a bearer token and extract the caller's user id.
    ///
    /// Fails with `Unauthenticated` when the token is absent, malformed,
    /// expired, or carries a bad signature.
    pub fn verify(&self, token: Option<&str>) -> Result<i64, DomainError> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| DomainError::Unauthenticated("Missing bearer token".into()))?;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                DomainError::Unauthenticated("Token expired".into())
            }
            _ => DomainError::Unauthenticated("Invalid token".into()),
        })?;

        token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| DomainError::Unauthenticated("Invalid token claims".into()))
    }
}
