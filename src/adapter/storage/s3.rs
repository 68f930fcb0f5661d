use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Builder;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::s3::StorageClient;
use crate::infra::config::S3Config;

pub struct S3StorageClient {
    client: Client,
    public_endpoint: String,
}

impl S3StorageClient {
    pub fn new(config: &S3Config) -> Self {
        let credentials = Credentials::new(&config.access_key, &config.secret_key, None, None, "rustfs");
        let s3_config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .endpoint_url(&config.endpoint)
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl StorageClient for S3StorageClient {
    async fn ensure_bucket(&self, bucket: &str) -> AppResult<()> {
        let exists = self.client.head_bucket().bucket(bucket).send().await;

        if exists.is_ok() {
            return Ok(());
        }

        let result = self.client.create_bucket().bucket(bucket).send().await;

        match result {
            Ok(_) => {
                info!("Bucket '{}' created", bucket);
                Ok(())
            }
            Err(SdkError::ServiceError(err)) => match err.err() {
                CreateBucketError::BucketAlreadyExists(_) | CreateBucketError::BucketAlreadyOwnedByYou(_) => Ok(()),
                other => {
                    warn!("Failed to create bucket '{}': {:?}", bucket, other);
                    Err(AppError::StorageError(other.to_string()))
                }
            },
            Err(e) => Err(AppError::StorageError(e.to_string())),
        }
    }

    async fn upload(&self, bucket: &str, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                warn!("S3 upload error bucket={} key={}: {:?}", bucket, key, e);
                AppError::StorageError(e.to_string())
            })?;

        info!("Uploaded s3://{}/{}", bucket, key);
        Ok(())
    }

    // Buckets carry a public-read policy, so the stored URL is just the
    // path-style address on the externally reachable endpoint.
    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, bucket, key)
    }
}
