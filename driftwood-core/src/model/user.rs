/*
    user.rs - Registered user record

    Created once on registration and immutable afterwards. The password
    hash is a PHC-format argon2 string; it stays inside the store and is
    skipped when a user is serialized.
*/

use super::types::UserId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    /// Display handle, unique across all users
    #[serde(rename = "username")]
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
