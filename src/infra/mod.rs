use std::sync::Arc;

use crate::adapter::crypto::argon2::ArgonPasswordHasher;
use crate::adapter::storage::s3::S3StorageClient;
use crate::application::dto::media::MediaPurpose;
use crate::application::interface::s3::StorageClient;
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

pub(crate) fn argon2_password_hasher() -> ArgonPasswordHasher {
    ArgonPasswordHasher::default()
}

pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(config).await?;
    let password_hasher = argon2_password_hasher();
    let storage = S3StorageClient::new(&config.s3);

    for purpose in MediaPurpose::ALL {
        storage
            .ensure_bucket(purpose.bucket())
            .await
            .map_err(|e| anyhow::anyhow!("bucket setup failed: {e}"))?;
    }

    Ok(AppState {
        pool,
        hasher: Arc::new(password_hasher),
        config: Arc::new(config.clone()),
        storage: Arc::new(storage),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::application::interface::crypto::CredentialsHasher;
    use crate::infra::argon2_password_hasher;

    #[rstest]
    #[tokio::test]
    async fn test_password_hasher_factory_round_trip() {
        let hasher = argon2_password_hasher();
        let hashed = hasher.hash_password("Password123!").await.unwrap();
        assert!(hasher.verify_password("Password123!", &hashed).await.unwrap());
    }
}
