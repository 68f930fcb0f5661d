use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::profile::{
    FontStyle, MusicStats, Platform, Playlist, Profile, ProfileEffect, SocialLink,
};

/// The full customization document, serialized with the same camelCase keys
/// the partial-update endpoint accepts.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile_picture: Option<String>,
    pub profile_effect: ProfileEffect,
    pub background_video: Option<String>,
    pub background_music: Option<String>,
    pub badges: Vec<String>,
    pub font_style: FontStyle,
    pub special_effects: Vec<String>,
    pub social_links: Vec<SocialLink>,
    pub music_stats: MusicStats,
    pub playlists: Vec<Playlist>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            profile_picture: profile.profile_picture,
            profile_effect: profile.profile_effect,
            background_video: profile.background_video,
            background_music: profile.background_music,
            badges: profile.badges,
            font_style: profile.font_style,
            special_effects: profile.special_effects,
            social_links: profile.social_links,
            music_stats: profile.music_stats,
            playlists: profile.playlists,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddSocialLinkRequest {
    pub platform: Platform,
    #[validate(length(min = 1, message = "Url must not be empty"))]
    pub url: String,
    #[validate(length(min = 1, message = "Label must not be empty"))]
    pub label: String,
}
