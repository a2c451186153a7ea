//! Session token issuance and validation.
//!
//! HS256 JWTs whose claims embed the authenticated user snapshot under a
//! `user` object, matching what the frontend decodes from the token. The
//! signing secret comes from `Config`, never from a constant.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use driftwood_core::model::User;
use driftwood_core::UserId;

use crate::error::{ApiError, ApiResult};

/// The user snapshot carried inside a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUser {
    pub username: String,
    pub id: UserId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    pub exp: i64,
    pub iat: i64,
}

pub fn issue(secret: &str, ttl_hours: i64, user: &User) -> ApiResult<String> {
    let now = Utc::now();
    let claims = Claims {
        user: TokenUser {
            username: user.name.clone(),
            id: user.id.clone(),
        },
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(anyhow::anyhow!("could not sign token: {}", e)))
}

pub fn verify(secret: &str, token: &str) -> ApiResult<TokenUser> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized)?;

    Ok(data.claims.user)
}
