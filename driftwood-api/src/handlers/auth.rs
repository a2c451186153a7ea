//! Registration and login: exchange credentials for a signed token.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use driftwood_core::StoreError;

use crate::error::{ApiError, ApiResult};
use crate::token;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> ApiResult<Json<TokenResponse>> {
    if creds.username.trim().is_empty() || creds.password.is_empty() {
        return Err(ApiError::BadRequest(
            "username & password expected".to_string(),
        ));
    }

    let user = state.store.register(&creds.username, &creds.password).await?;
    info!(user = %user.id, name = %user.name, "new registration");

    let token = token::issue(&state.config.jwt_secret, state.config.token_ttl_hours, &user)?;
    Ok(Json(TokenResponse { token }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> ApiResult<Json<TokenResponse>> {
    // unknown name and bad password both answer 401; only the message
    // text distinguishes them
    let user = state
        .store
        .authenticate(&creds.username, &creds.password)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::Login("user not found".to_string()),
            StoreError::InvalidCredentials => ApiError::Login("invalid password".to_string()),
            other => ApiError::Store(other),
        })?;

    let token = token::issue(&state.config.jwt_secret, state.config.token_ttl_hours, &user)?;
    Ok(Json(TokenResponse { token }))
}
