//! Bearer-token authentication extractor.
//!
//! Handlers that need an authenticated caller take an `AuthUser` argument;
//! extraction reads the `Authorization: Bearer` header and validates the
//! token against the configured secret. Public and protected methods can
//! share a route path this way, with no per-route middleware layering.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use driftwood_core::UserId;

use crate::error::ApiError;
use crate::token;
use crate::AppState;

/// The `(userID, userName)` pair resolved from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: UserId,
    pub name: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let raw = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;
        let user = token::verify(&state.config.jwt_secret, raw)?;

        Ok(AuthUser {
            id: user.id,
            name: user.username,
        })
    }
}
