use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::{id::Id, user::User};

/// Hard cap on selected badges. Toggling a sixth badge on is a silent no-op.
pub const MAX_BADGES: usize = 5;

/// Fixed badge catalog: badge id to the emoji shown next to the avatar.
pub const BADGE_CATALOG: [(&str, &str); 8] = [
    ("star", "\u{2b50}"),
    ("crown", "\u{1f451}"),
    ("fire", "\u{1f525}"),
    ("diamond", "\u{1f48e}"),
    ("heart", "\u{2764}\u{fe0f}"),
    ("lightning", "\u{26a1}"),
    ("trophy", "\u{1f3c6}"),
    ("rocket", "\u{1f680}"),
];

/// Fixed special-effect catalog. Effects toggle independently with no cap.
pub const EFFECT_CATALOG: [&str; 4] = ["particles", "glow-pulse", "rainbow-border", "star-trail"];

pub fn badge_emoji(badge_id: &str) -> Option<&'static str> {
    BADGE_CATALOG.iter().find(|(id, _)| *id == badge_id).map(|(_, emoji)| *emoji)
}

pub fn is_known_badge(badge_id: &str) -> bool {
    BADGE_CATALOG.iter().any(|(id, _)| *id == badge_id)
}

pub fn is_known_effect(effect_id: &str) -> bool {
    EFFECT_CATALOG.contains(&effect_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileEffect {
    #[default]
    Glow,
    Rainbow,
    Neon,
    Fire,
}

impl ProfileEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileEffect::Glow => "glow",
            ProfileEffect::Rainbow => "rainbow",
            ProfileEffect::Neon => "neon",
            ProfileEffect::Fire => "fire",
        }
    }

    /// Unknown stored values fall back to the default ring, mirroring the
    /// public page's lookup-or-glow behavior.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "rainbow" => ProfileEffect::Rainbow,
            "neon" => ProfileEffect::Neon,
            "fire" => ProfileEffect::Fire,
            _ => ProfileEffect::Glow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Modern,
    Elegant,
    Playful,
    Bold,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Modern => "modern",
            FontStyle::Elegant => "elegant",
            FontStyle::Playful => "playful",
            FontStyle::Bold => "bold",
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "elegant" => FontStyle::Elegant,
            "playful" => FontStyle::Playful,
            "bold" => FontStyle::Bold,
            _ => FontStyle::Modern,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Youtube,
    Tiktok,
    Discord,
    Twitch,
    Linkedin,
    Github,
    Website,
    Other,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Discord => "discord",
            Platform::Twitch => "twitch",
            Platform::Linkedin => "linkedin",
            Platform::Github => "github",
            Platform::Website => "website",
            Platform::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopArtist {
    pub name: String,
    pub plays: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopTrack {
    pub name: String,
    pub artist: String,
    pub plays: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreShare {
    pub name: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentlyPlaying {
    pub name: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MusicStats {
    #[serde(default)]
    pub top_artists: Vec<TopArtist>,
    #[serde(default)]
    pub top_tracks: Vec<TopTrack>,
    #[serde(default)]
    pub top_genres: Vec<GenreShare>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_playing: Option<CurrentlyPlaying>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaylistTrack {
    pub name: String,
    pub artist: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tracks: Vec<PlaylistTrack>,
}

/// The complete customization document for one user's public page. One row in
/// the profiles table, owned by the editor session and mutated only through
/// [`Profile::apply`] and the toggle helpers.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user_id: Id<User>,
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

impl Profile {
    pub fn new(user_id: Id<User>) -> Self {
        Self {
            user_id,
            profile_picture: None,
            profile_effect: ProfileEffect::default(),
            background_video: None,
            background_music: None,
            badges: Vec::new(),
            font_style: FontStyle::default(),
            special_effects: Vec::new(),
            social_links: Vec::new(),
            music_stats: MusicStats::default(),
            playlists: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Shallow merge: every field present in the patch fully replaces the old
    /// value; absent fields stay untouched. Nested objects are not deep-merged.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(v) = patch.profile_picture {
            self.profile_picture = v;
        }
        if let Some(v) = patch.profile_effect {
            self.profile_effect = v;
        }
        if let Some(v) = patch.background_video {
            self.background_video = v;
        }
        if let Some(v) = patch.background_music {
            self.background_music = v;
        }
        if let Some(v) = patch.badges {
            self.badges = v;
        }
        if let Some(v) = patch.font_style {
            self.font_style = v;
        }
        if let Some(v) = patch.special_effects {
            self.special_effects = v;
        }
        if let Some(v) = patch.social_links {
            self.social_links = v;
        }
        if let Some(v) = patch.music_stats {
            self.music_stats = v;
        }
        if let Some(v) = patch.playlists {
            self.playlists = v;
        }
        self.updated_at = Utc::now();
    }

    /// Selected badge toggles off; unselected toggles on unless the cap is
    /// reached, in which case nothing changes. Returns whether the set changed.
    pub fn toggle_badge(&mut self, badge_id: &str) -> bool {
        if let Some(pos) = self.badges.iter().position(|b| b == badge_id) {
            self.badges.remove(pos);
            return true;
        }
        if self.badges.len() >= MAX_BADGES {
            return false;
        }
        self.badges.push(badge_id.to_owned());
        true
    }

    pub fn toggle_effect(&mut self, effect_id: &str) {
        if let Some(pos) = self.special_effects.iter().position(|e| e == effect_id) {
            self.special_effects.remove(pos);
        } else {
            self.special_effects.push(effect_id.to_owned());
        }
    }

    /// Appends a link with a unix-millis id and returns a copy of it.
    pub fn add_social_link(&mut self, platform: Platform, url: String, label: String) -> SocialLink {
        let link = SocialLink {
            id: Utc::now().timestamp_millis().to_string(),
            platform,
            url,
            label,
        };
        self.social_links.push(link.clone());
        link
    }

    /// Removes a link by id. Unknown ids are a no-op.
    pub fn remove_social_link(&mut self, link_id: &str) -> bool {
        let before = self.social_links.len();
        self.social_links.retain(|l| l.id != link_id);
        self.social_links.len() != before
    }
}

/// A subset-of-fields update to a profile. Any combination of fields, including
/// none at all. Media URI fields distinguish "absent" (unchanged) from an
/// explicit null (clears the field).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub profile_picture: Option<Option<String>>,
    pub profile_effect: Option<ProfileEffect>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub background_video: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub background_music: Option<Option<String>>,
    pub badges: Option<Vec<String>>,
    pub font_style: Option<FontStyle>,
    pub special_effects: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub music_stats: Option<MusicStats>,
    pub playlists: Option<Vec<Playlist>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.profile_picture.is_none()
            && self.profile_effect.is_none()
            && self.background_video.is_none()
            && self.background_music.is_none()
            && self.badges.is_none()
            && self.font_style.is_none()
            && self.special_effects.is_none()
            && self.social_links.is_none()
            && self.music_stats.is_none()
            && self.playlists.is_none()
    }
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> Profile {
        Profile::new(Id::generate())
    }

    #[test]
    fn test_apply_replaces_only_present_fields() {
        let mut p = profile();
        p.profile_picture = Some("https://cdn.example/a.png".to_string());
        p.badges = vec!["star".to_string()];

        let patch = ProfilePatch {
            font_style: Some(FontStyle::Elegant),
            ..Default::default()
        };
        p.apply(patch);

        assert_eq!(p.font_style, FontStyle::Elegant);
        assert_eq!(p.profile_picture.as_deref(), Some("https://cdn.example/a.png"));
        assert_eq!(p.badges, vec!["star".to_string()]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut once = profile();
        let mut twice = once.clone();
        let patch = ProfilePatch {
            profile_effect: Some(ProfileEffect::Neon),
            badges: Some(vec!["fire".to_string(), "crown".to_string()]),
            ..Default::default()
        };
        once.apply(patch.clone());
        twice.apply(patch.clone());
        twice.apply(patch);

        assert_eq!(once.profile_effect, twice.profile_effect);
        assert_eq!(once.badges, twice.badges);
    }

    #[test]
    fn test_apply_replaces_music_stats_wholesale() {
        let mut p = profile();
        p.music_stats.top_artists = vec![TopArtist {
            name: "Old Artist".to_string(),
            plays: 10,
            image: None,
        }];
        p.music_stats.top_genres = vec![GenreShare {
            name: "synthwave".to_string(),
            percentage: 80,
        }];

        let patch = ProfilePatch {
            music_stats: Some(MusicStats {
                top_tracks: vec![TopTrack {
                    name: "New Track".to_string(),
                    artist: "New Artist".to_string(),
                    plays: 1,
                    image: None,
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        p.apply(patch);

        // No deep merge: the previous artists and genres are gone.
        assert!(p.music_stats.top_artists.is_empty());
        assert!(p.music_stats.top_genres.is_empty());
        assert_eq!(p.music_stats.top_tracks.len(), 1);
    }

    #[test]
    fn test_apply_null_clears_media_field() {
        let mut p = profile();
        p.background_video = Some("https://cdn.example/v.mp4".to_string());

        let patch: ProfilePatch = serde_json::from_value(json!({ "backgroundVideo": null })).unwrap();
        p.apply(patch);
        assert!(p.background_video.is_none());
    }

    #[test]
    fn test_patch_absent_field_stays_absent() {
        let patch: ProfilePatch = serde_json::from_value(json!({ "fontStyle": "bold" })).unwrap();
        assert!(patch.background_video.is_none());
        assert_eq!(patch.font_style, Some(FontStyle::Bold));
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<ProfilePatch, _> = serde_json::from_value(json!({ "fontstyle": "bold" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut p = profile();
        p.badges = vec!["star".to_string()];
        let snapshot = p.badges.clone();
        p.apply(ProfilePatch::default());
        assert_eq!(p.badges, snapshot);
        assert!(ProfilePatch::default().is_empty());
    }

    #[test]
    fn test_badge_toggle_sequence_respects_cap() {
        let mut p = profile();
        for badge in ["star", "crown", "fire", "diamond", "heart"] {
            assert!(p.toggle_badge(badge));
        }
        assert_eq!(p.badges, vec!["star", "crown", "fire", "diamond", "heart"]);

        // Sixth badge is silently ignored.
        assert!(!p.toggle_badge("rocket"));
        assert_eq!(p.badges.len(), MAX_BADGES);
        assert!(!p.badges.contains(&"rocket".to_string()));

        // Toggling a selected badge off always works.
        assert!(p.toggle_badge("fire"));
        assert_eq!(p.badges, vec!["star", "crown", "diamond", "heart"]);
    }

    #[test]
    fn test_effect_toggle_has_no_cap() {
        let mut p = profile();
        for effect in EFFECT_CATALOG {
            p.toggle_effect(effect);
        }
        assert_eq!(p.special_effects.len(), EFFECT_CATALOG.len());
        p.toggle_effect("particles");
        assert!(!p.special_effects.contains(&"particles".to_string()));
    }

    #[test]
    fn test_add_social_link_appends_with_generated_id() {
        let mut p = profile();
        let link = p.add_social_link(
            Platform::Twitter,
            "https://x.com/a".to_string(),
            "Follow me".to_string(),
        );

        assert_eq!(p.social_links.len(), 1);
        let stored = p.social_links.last().unwrap();
        assert_eq!(stored.id, link.id);
        assert!(!stored.id.is_empty());
        assert_eq!(stored.platform, Platform::Twitter);
        assert_eq!(stored.url, "https://x.com/a");
        assert_eq!(stored.label, "Follow me");
    }

    #[test]
    fn test_remove_social_link_unknown_id_is_noop() {
        let mut p = profile();
        p.add_social_link(Platform::Github, "https://github.com/a".to_string(), "Code".to_string());
        assert!(!p.remove_social_link("does-not-exist"));
        assert_eq!(p.social_links.len(), 1);
    }

    #[test]
    fn test_badge_catalog_lookup() {
        assert_eq!(badge_emoji("star"), Some("\u{2b50}"));
        assert_eq!(badge_emoji("unknown"), None);
        assert!(is_known_badge("rocket"));
        assert!(!is_known_badge("meteor"));
        assert!(is_known_effect("glow-pulse"));
        assert!(!is_known_effect("confetti"));
    }

    #[test]
    fn test_effect_and_font_parse_fallback() {
        assert_eq!(ProfileEffect::parse_or_default("neon"), ProfileEffect::Neon);
        assert_eq!(ProfileEffect::parse_or_default("sparkle"), ProfileEffect::Glow);
        assert_eq!(FontStyle::parse_or_default("elegant"), FontStyle::Elegant);
        assert_eq!(FontStyle::parse_or_default("comic"), FontStyle::Modern);
    }
}
