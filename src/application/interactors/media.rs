use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::media::{MediaPurpose, UploadMediaDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileFieldWriter, ProfileReader, ProfileWriter};
use crate::application::interface::s3::StorageClient;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, ProfilePatch};
use crate::domain::entities::user::User;

/// Uploads a media file to the purpose's bucket and stores the issued public
/// URL in the matching profile field, one transaction per upload.
#[derive(Clone)]
pub struct UploadMediaInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
    field_writer: Arc<dyn ProfileFieldWriter>,
    storage: Arc<dyn StorageClient>,
}

impl UploadMediaInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
        field_writer: Arc<dyn ProfileFieldWriter>,
        storage: Arc<dyn StorageClient>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
            field_writer,
            storage,
        }
    }

    pub async fn execute(&self, dto: UploadMediaDTO) -> AppResult<String> {
        let user_id: Id<User> = dto.id.try_into()?;
        if dto.data.is_empty() {
            return Err(AppError::InvalidUpload("empty file".to_string()));
        }

        let extension = dto
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && ext.len() <= 8)
            .ok_or_else(|| AppError::InvalidUpload("file name has no extension".to_string()))?;
        let bucket = dto.purpose.bucket();
        let key = format!("{}/{}.{}", user_id.value, Utc::now().timestamp_millis(), extension);

        self.storage
            .upload(bucket, &key, dto.data, &dto.content_type)
            .await?;
        let url = self.storage.public_url(bucket, &key);

        if self.profile_reader.find_by_user_id(&user_id).await?.is_none() {
            self.profile_writer.insert(Profile::new(user_id.clone())).await?;
        }
        let patch = match dto.purpose {
            MediaPurpose::ProfilePicture => ProfilePatch {
                profile_picture: Some(Some(url.clone())),
                ..Default::default()
            },
            MediaPurpose::BackgroundVideo => ProfilePatch {
                background_video: Some(Some(url.clone())),
                ..Default::default()
            },
            MediaPurpose::BackgroundMusic => ProfilePatch {
                background_music: Some(Some(url.clone())),
                ..Default::default()
            },
        };
        self.field_writer.update_fields(&user_id, &patch).await?;
        self.db_session.commit().await?;
        info!("Stored {} upload for user {}", bucket, user_id.value);
        Ok(url)
    }
}
