use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{
    AddSocialLinkDTO, RemoveSocialLinkDTO, ToggleBadgeDTO, ToggleEffectDTO, UpdateProfileDTO, UsernameDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileFieldWriter, ProfileReader, ProfileWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{
    is_known_badge, is_known_effect, Profile, ProfilePatch, SocialLink, MAX_BADGES,
};
use crate::domain::entities::user::User;
use crate::domain::preview::{render, PreviewDocument};

fn validate_patch(patch: &ProfilePatch) -> AppResult<()> {
    if let Some(badges) = &patch.badges {
        if badges.len() > MAX_BADGES {
            return Err(AppError::BadgeLimitExceeded);
        }
        if let Some(unknown) = badges.iter().find(|b| !is_known_badge(b)) {
            return Err(AppError::UnknownBadge(unknown.clone()));
        }
    }
    if let Some(effects) = &patch.special_effects {
        if let Some(unknown) = effects.iter().find(|e| !is_known_effect(e)) {
            return Err(AppError::UnknownEffect(unknown.clone()));
        }
    }
    Ok(())
}

/// Editor read path. Creates the default document on first open so every
/// later partial update has a row to land in.
#[derive(Clone)]
pub struct GetProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl GetProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        if let Some(profile) = self.profile_reader.find_by_user_id(&user_id).await? {
            return Ok(profile);
        }
        let profile = Profile::new(user_id.clone());
        self.profile_writer.insert(profile.clone()).await?;
        self.db_session.commit().await?;
        info!("Created default profile for user {}", user_id.value);
        Ok(profile)
    }
}

/// The update reducer: merges a partial update into the document and persists
/// exactly the fields the patch names. Merge and persistence share one
/// transaction; a failed write surfaces the error without retry.
#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    field_writer: Arc<dyn ProfileFieldWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        field_writer: Arc<dyn ProfileFieldWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            field_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        validate_patch(&dto.patch)?;

        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        if dto.patch.is_empty() {
            return Ok(profile);
        }

        profile.apply(dto.patch.clone());
        self.field_writer.update_fields(&user_id, &dto.patch).await?;
        self.db_session.commit().await?;
        Ok(profile)
    }
}

#[derive(Clone)]
pub struct ToggleBadgeInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    field_writer: Arc<dyn ProfileFieldWriter>,
}

impl ToggleBadgeInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        field_writer: Arc<dyn ProfileFieldWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            field_writer,
        }
    }

    pub async fn execute(&self, dto: ToggleBadgeDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        if !is_known_badge(&dto.badge_id) {
            return Err(AppError::UnknownBadge(dto.badge_id));
        }
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        // Toggling a sixth badge on changes nothing; skip the write.
        if profile.toggle_badge(&dto.badge_id) {
            let patch = ProfilePatch {
                badges: Some(profile.badges.clone()),
                ..Default::default()
            };
            self.field_writer.update_fields(&user_id, &patch).await?;
            self.db_session.commit().await?;
        }
        Ok(profile)
    }
}

#[derive(Clone)]
pub struct ToggleEffectInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    field_writer: Arc<dyn ProfileFieldWriter>,
}

impl ToggleEffectInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        field_writer: Arc<dyn ProfileFieldWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            field_writer,
        }
    }

    pub async fn execute(&self, dto: ToggleEffectDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        if !is_known_effect(&dto.effect_id) {
            return Err(AppError::UnknownEffect(dto.effect_id));
        }
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        profile.toggle_effect(&dto.effect_id);
        let patch = ProfilePatch {
            special_effects: Some(profile.special_effects.clone()),
            ..Default::default()
        };
        self.field_writer.update_fields(&user_id, &patch).await?;
        self.db_session.commit().await?;
        Ok(profile)
    }
}

#[derive(Clone)]
pub struct AddSocialLinkInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    field_writer: Arc<dyn ProfileFieldWriter>,
}

impl AddSocialLinkInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        field_writer: Arc<dyn ProfileFieldWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            field_writer,
        }
    }

    pub async fn execute(&self, dto: AddSocialLinkDTO) -> AppResult<SocialLink> {
        let user_id: Id<User> = dto.id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        let link = profile.add_social_link(dto.platform, dto.url, dto.label);
        let patch = ProfilePatch {
            social_links: Some(profile.social_links.clone()),
            ..Default::default()
        };
        self.field_writer.update_fields(&user_id, &patch).await?;
        self.db_session.commit().await?;
        Ok(link)
    }
}

#[derive(Clone)]
pub struct RemoveSocialLinkInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    field_writer: Arc<dyn ProfileFieldWriter>,
}

impl RemoveSocialLinkInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        field_writer: Arc<dyn ProfileFieldWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            field_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveSocialLinkDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        if profile.remove_social_link(&dto.link_id) {
            let patch = ProfilePatch {
                social_links: Some(profile.social_links.clone()),
                ..Default::default()
            };
            self.field_writer.update_fields(&user_id, &patch).await?;
            self.db_session.commit().await?;
        }
        Ok(profile)
    }
}

/// Editor preview pane: the same projection as the public page, with media
/// autoplay off.
#[derive(Clone)]
pub struct GetPreviewInteractor {
    user_reader: Arc<dyn UserReader>,
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetPreviewInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self {
            user_reader,
            profile_reader,
        }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<PreviewDocument> {
        let user_id: Id<User> = dto.id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;
        let profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .unwrap_or_else(|| Profile::new(user_id.clone()));
        Ok(render(&profile, &user.username, false))
    }
}

/// Public read path: username-addressed, single match required. An absent row
/// is a terminal not-found; database failures propagate separately so a client
/// can tell transient errors apart.
#[derive(Clone)]
pub struct GetPublicProfileInteractor {
    user_reader: Arc<dyn UserReader>,
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetPublicProfileInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>, profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self {
            user_reader,
            profile_reader,
        }
    }

    pub async fn execute(&self, dto: UsernameDTO) -> AppResult<PreviewDocument> {
        let user = self
            .user_reader
            .find_by_username(&dto.username)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        let profile = self
            .profile_reader
            .find_by_user_id(&user.id)
            .await?
            .unwrap_or_else(|| Profile::new(user.id.clone()));
        Ok(render(&profile, &user.username, true))
    }
}
