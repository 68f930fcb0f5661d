use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use async_trait::async_trait;

use crate::application::{
    app_error::{AppError, AppResult},
    interface::crypto::CredentialsHasher,
};

/// Argon2id hashing, moved off the async runtime since a single hash takes
/// tens of milliseconds.
#[derive(Default, Clone)]
pub struct ArgonPasswordHasher {
    hasher: Argon2<'static>,
}

#[async_trait]
impl CredentialsHasher for ArgonPasswordHasher {
    async fn hash_password(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            hasher
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|_| AppError::PasswordHashError)
        })
        .await
        .map_err(|_| AppError::PasswordHashError)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || {
            let parsed_hash =
                PasswordHash::new(&hashed).map_err(|_| AppError::InvalidCredentials)?;
            match hasher.verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(_) => Ok(false),
            }
        })
        .await
        .map_err(|_| AppError::InvalidCredentials)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "Password123!";

    #[tokio::test]
    async fn test_hash_then_verify_round_trip() {
        let hasher = ArgonPasswordHasher::default();
        let hash = hasher.hash_password(PASSWORD).await.unwrap();
        assert!(!hash.is_empty());
        assert!(hasher.verify_password(PASSWORD, &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_wrong_password() {
        let hasher = ArgonPasswordHasher::default();
        let hash = hasher.hash_password(PASSWORD).await.unwrap();
        assert!(!hasher.verify_password("WrongPassword1!", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_hash() {
        let hasher = ArgonPasswordHasher::default();
        let result = hasher.verify_password(PASSWORD, "not-a-hash").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }
}
