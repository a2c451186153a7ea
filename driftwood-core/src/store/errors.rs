/*
    errors.rs - Error types for the store

    Every expected failure (unknown id, duplicate name, wrong password,
    non-owner delete) is a normal recoverable outcome. Only `Hashing`
    signals an infrastructure failure in the password primitive.
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Post, comment or user absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate username on registration
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Password verification failed
    #[error("invalid password")]
    InvalidCredentials,

    /// Actor is not the owner of the entity being mutated
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Password hashing primitive failed
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
