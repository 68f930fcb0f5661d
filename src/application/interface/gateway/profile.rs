use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::{
    id::Id,
    profile::{Profile, ProfilePatch},
    user::User,
};

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: Profile) -> AppResult<()>;
}

/// The persistence half of the update reducer: writes only the columns for
/// fields present in the patch, leaving every other column untouched.
#[async_trait]
pub trait ProfileFieldWriter: Send + Sync {
    async fn update_fields(&self, user_id: &Id<User>, patch: &ProfilePatch) -> AppResult<()>;
}
