#![cfg(test)]

use std::sync::Arc;

use rstest::fixture;

use crate::adapter::storage::s3::S3StorageClient;
use crate::infra::argon2_password_hasher;
use crate::infra::config::{
    AppConfig, ApplicationConfig, DatabaseConfig, LoggerConfig, MediaConfig, S3Config, SessionConfig,
};
use crate::infra::db::init_db;
use crate::infra::state::AppState;

#[fixture]
pub fn test_config() -> AppConfig {
    AppConfig {
        db: DatabaseConfig {
            url: std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set"),
            max_connections: 5,
        },
        logger: LoggerConfig {
            log_path: "./test.log".to_string(),
        },
        application: ApplicationConfig {
            allow_origins: vec!["*".to_string()],
            address: std::env::var("TEST_APP_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        },
        session: SessionConfig {
            max_lifetime: 86_400,
            idle_timeout: 3_600,
            cookie_name: std::env::var("TEST_COOKIE_NAME").unwrap_or_else(|_| "session_id".to_string()),
            cookie_secure: false,
            cookie_http_only: true,
        },
        s3: S3Config {
            access_key: std::env::var("TEST_S3_ACCESS_KEY").unwrap_or_else(|_| "admin".to_string()),
            secret_key: std::env::var("TEST_S3_SECRET_KEY").unwrap_or_else(|_| "password".to_string()),
            endpoint: std::env::var("TEST_S3_ENDPOINT").unwrap_or_else(|_| "http://127.0.0.1:9000".to_string()),
            region: std::env::var("TEST_S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            public_endpoint: std::env::var("TEST_S3_PUBLIC_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string()),
        },
        media: MediaConfig {
            max_upload_bytes: 10 * 1024 * 1024,
        },
    }
}

#[fixture]
pub async fn init_test_app_state(test_config: AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(&test_config).await?;
    let password_hasher = argon2_password_hasher();
    let storage = S3StorageClient::new(&test_config.s3);

    Ok(AppState {
        pool,
        hasher: Arc::new(password_hasher),
        config: Arc::new(test_config.clone()),
        storage: Arc::new(storage),
    })
}
