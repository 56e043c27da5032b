//! Custom Extractors
//!
//! Axum extractors for request parsing.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

/// The raw bearer token from the Authorization header, if any.
///
/// Extraction never fails: token *verification* is a domain concern and
/// runs at the start of every service operation, so a missing or
/// malformed header is handed over as `None` and surfaces as
/// `Unauthenticated` from the service, like every other failed check.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|t| t.to_owned());

        Ok(BearerToken(token))
    }
}
