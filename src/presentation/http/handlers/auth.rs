//! Authentication Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{LoginRequest, SignupRequest};
use crate::application::dto::response::TokenResponse;
use crate::application::services::{LoginInput, SignupInput};
use crate::shared::error::DomainError;
use crate::startup::AppState;

/// Create a new account
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), DomainError> {
    let token = state
        .auth_service
        .signup(SignupInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TokenResponse::from(token))))
}

/// Login with credentials
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, DomainError> {
    let token = state
        .auth_service
        .login(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(TokenResponse::from(token)))
}
