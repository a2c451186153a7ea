/*
    users.rs - Credential store

    Owns user records keyed by display name. Registration performs the
    duplicate check, the argon2 hash and the insert under one held write
    lock, so two racing registrations of the same name cannot both win.
*/

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{User, UserId};
use crate::store::errors::{StoreError, StoreResult};

pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        UserStore {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new user. Fails with `AlreadyExists` when the name is
    /// taken. The plaintext password is hashed immediately and never stored.
    pub async fn register(&self, name: &str, password: &str) -> StoreResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(name) {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| StoreError::Hashing(e.to_string()))?
            .to_string();

        let user = User {
            id: UserId::generate(),
            name: name.to_string(),
            password_hash,
        };
        users.insert(name.to_string(), user.clone());

        debug!(user = %user.id, name, "registered user");
        Ok(user)
    }

    /// Look up a user by name and verify the password against the stored
    /// hash. Verification is delegated to argon2, which compares in
    /// constant time.
    pub async fn authenticate(&self, name: &str, password: &str) -> StoreResult<User> {
        let users = self.users.read().await;

        let user = users
            .get(name)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", name)))?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| StoreError::Hashing(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| StoreError::InvalidCredentials)?;

        Ok(user.clone())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let store = UserStore::new();

        let user = store.register("alice", "hunter2").await.unwrap();
        assert_eq!(user.name, "alice");
        assert!(user.password_hash.starts_with("$argon2"));
        assert!(!user.password_hash.contains("hunter2"));

        let back = store.authenticate("alice", "hunter2").await.unwrap();
        assert_eq!(back.id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let store = UserStore::new();

        let first = store.register("bob", "pw1").await.unwrap();
        let err = store.register("bob", "pw2").await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));

        // the first record is untouched, including its password
        let back = store.authenticate("bob", "pw1").await.unwrap();
        assert_eq!(back.id, first.id);
        assert!(store.authenticate("bob", "pw2").await.is_err());
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let store = UserStore::new();
        store.register("carol", "secret").await.unwrap();

        let err = store.authenticate("carol", "wrong").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let store = UserStore::new();
        let err = store.authenticate("nobody", "pw").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
