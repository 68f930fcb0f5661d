use async_trait::async_trait;
use chrono::Utc;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder, Row};

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileFieldWriter, ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{
    FontStyle, MusicStats, Playlist, Profile, ProfileEffect, ProfilePatch, SocialLink,
};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_profile(row: PgRow) -> AppResult<Profile> {
        let effect: String = row.try_get("profile_effect")?;
        let font: String = row.try_get("font_style")?;
        let social_links: Json<Vec<SocialLink>> = row.try_get("social_links")?;
        let music_stats: Json<MusicStats> = row.try_get("music_stats")?;
        let playlists: Json<Vec<Playlist>> = row.try_get("playlists")?;

        Ok(Profile {
            user_id: Id::new(row.try_get("user_id")?),
            profile_picture: row.try_get("profile_picture_url")?,
            // Unrecognised stored values render as the defaults rather than
            // failing the whole read.
            profile_effect: ProfileEffect::parse_or_default(&effect),
            background_video: row.try_get("background_video_url")?,
            background_music: row.try_get("background_music_url")?,
            badges: row.try_get("badges")?,
            font_style: FontStyle::parse_or_default(&font),
            special_effects: row.try_get("special_effects")?,
            social_links: social_links.0,
            music_stats: music_stats.0,
            playlists: playlists.0,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                user_id, profile_picture_url, profile_effect,
                                background_video_url, background_music_url,
                                badges, font_style, special_effects,
                                social_links, music_stats, playlists, updated_at
                            FROM
                                profiles
                            WHERE user_id = $1
                        "#,
                    )
                    .bind(&user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.map(Self::map_profile).transpose()
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: Profile) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (user_id, profile_picture_url, profile_effect,
                                 background_video_url, background_music_url,
                                 badges, font_style, special_effects,
                                 social_links, music_stats, playlists, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                        "#,
                    )
                    .bind(&profile.user_id.value)
                    .bind(&profile.profile_picture)
                    .bind(profile.profile_effect.as_str())
                    .bind(&profile.background_video)
                    .bind(&profile.background_music)
                    .bind(&profile.badges)
                    .bind(profile.font_style.as_str())
                    .bind(&profile.special_effects)
                    .bind(Json(&profile.social_links))
                    .bind(Json(&profile.music_stats))
                    .bind(Json(&profile.playlists))
                    .bind(&profile.updated_at)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileFieldWriter for ProfileGateway {
    /// Builds an UPDATE covering exactly the columns the patch names, plus
    /// `updated_at`. Fields absent from the patch never appear in the
    /// statement, so concurrent edits to other sections are left alone.
    async fn update_fields(&self, user_id: &Id<User>, patch: &ProfilePatch) -> AppResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                let patch = patch.clone();
                async move {
                    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE profiles SET ");
                    let mut columns = builder.separated(", ");

                    if let Some(value) = &patch.profile_picture {
                        columns.push("profile_picture_url = ");
                        columns.push_bind_unseparated(value.clone());
                    }
                    if let Some(effect) = &patch.profile_effect {
                        columns.push("profile_effect = ");
                        columns.push_bind_unseparated(effect.as_str());
                    }
                    if let Some(value) = &patch.background_video {
                        columns.push("background_video_url = ");
                        columns.push_bind_unseparated(value.clone());
                    }
                    if let Some(value) = &patch.background_music {
                        columns.push("background_music_url = ");
                        columns.push_bind_unseparated(value.clone());
                    }
                    if let Some(badges) = &patch.badges {
                        columns.push("badges = ");
                        columns.push_bind_unseparated(badges.clone());
                    }
                    if let Some(font) = &patch.font_style {
                        columns.push("font_style = ");
                        columns.push_bind_unseparated(font.as_str());
                    }
                    if let Some(effects) = &patch.special_effects {
                        columns.push("special_effects = ");
                        columns.push_bind_unseparated(effects.clone());
                    }
                    if let Some(links) = &patch.social_links {
                        columns.push("social_links = ");
                        columns.push_bind_unseparated(Json(links.clone()));
                    }
                    if let Some(stats) = &patch.music_stats {
                        columns.push("music_stats = ");
                        columns.push_bind_unseparated(Json(stats.clone()));
                    }
                    if let Some(playlists) = &patch.playlists {
                        columns.push("playlists = ");
                        columns.push_bind_unseparated(Json(playlists.clone()));
                    }
                    columns.push("updated_at = ");
                    columns.push_bind_unseparated(Utc::now());

                    builder.push(" WHERE user_id = ");
                    builder.push_bind(user_id);
                    builder.build().execute(tx.as_mut()).await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}
