//! API error type and its HTTP status mapping.
//!
//! Store error kinds map onto statuses as the frontend expects:
//! NotFound -> 400, PermissionDenied -> 403, AlreadyExists -> 422,
//! InvalidCredentials -> 401, hashing/internal failures -> 500.
//! Duplicate registration answers with the frontend's error-list body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use driftwood_core::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// Login failure; carries the message for the 401 body
    #[error("{0}")]
    Login(String),

    /// Malformed request content caught at the boundary
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => message(StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::Login(msg) => message(StatusCode::UNAUTHORIZED, &msg),
            ApiError::BadRequest(msg) => message(StatusCode::BAD_REQUEST, &msg),
            ApiError::Store(err) => store_response(err),
            ApiError::Internal(err) => {
                tracing::error!("internal error: {:?}", err);
                message(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

fn store_response(err: StoreError) -> Response {
    match err {
        StoreError::NotFound(what) => message(StatusCode::BAD_REQUEST, &format!("invalid id: {}", what)),
        StoreError::PermissionDenied(_) => message(StatusCode::FORBIDDEN, "permission denied"),
        StoreError::InvalidCredentials => message(StatusCode::UNAUTHORIZED, "invalid password"),
        StoreError::AlreadyExists(name) => {
            let body = Json(json!({
                "errors": [{
                    "location": "body",
                    "param": "username",
                    "value": name,
                    "msg": "already exists",
                }]
            }));
            (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
        }
        StoreError::Hashing(detail) => {
            tracing::error!("hashing failure: {}", detail);
            message(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}

fn message(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "message": msg }))).into_response()
}

pub type ApiResult<T> = Result<T, ApiError>;
