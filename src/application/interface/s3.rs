use async_trait::async_trait;
use bytes::Bytes;

use crate::application::app_error::AppResult;

/// Object storage behind the media upload path. Uploaded objects are publicly
/// addressable; `public_url` issues the durable URL stored in the profile.
#[async_trait]
pub trait StorageClient: Send + Sync {
    async fn ensure_bucket(&self, bucket: &str) -> AppResult<()>;
    async fn upload(&self, bucket: &str, key: &str, data: Bytes, content_type: &str) -> AppResult<()>;
    fn public_url(&self, bucket: &str, key: &str) -> String;
}
