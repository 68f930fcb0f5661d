use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::profile::{badge_emoji, FontStyle, MusicStats, Platform, Playlist, Profile, ProfileEffect};

/// Badges shown next to the avatar. The editor stores up to five; the page
/// renders the first three in selection order.
pub const BADGE_DISPLAY_LIMIT: usize = 3;
pub const LINK_DISPLAY_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Ring treatment class; present only when a picture is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_class: Option<String>,
    /// Shown when no picture is set: the username's first initial.
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BadgeView {
    pub id: String,
    pub emoji: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SocialLinkView {
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub label: String,
    /// Platform initial, the fallback when no platform icon exists client-side.
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaView {
    pub url: String,
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
}

/// Read-only projection of a profile, shaped like the public page. The same
/// structure backs the editor's live preview pane and the published page; the
/// only difference is the autoplay flag on background media.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewDocument {
    pub username: String,
    pub font_class: String,
    pub avatar: AvatarView,
    pub badges: Vec<BadgeView>,
    pub social_links: Vec<SocialLinkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_video: Option<MediaView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_music: Option<MediaView>,
    pub special_effects: Vec<String>,
    pub music_stats: MusicStats,
    pub playlists: Vec<Playlist>,
}

pub fn font_class(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Modern => "font-sans",
        FontStyle::Elegant => "font-serif",
        FontStyle::Playful => "font-mono",
        FontStyle::Bold => "font-black",
    }
}

pub fn effect_class(effect: ProfileEffect) -> &'static str {
    match effect {
        ProfileEffect::Glow => "ring-glow",
        ProfileEffect::Rainbow => "ring-rainbow",
        ProfileEffect::Neon => "ring-neon",
        ProfileEffect::Fire => "ring-fire",
    }
}

/// Pure, synchronous projection: the output is a function of the profile and
/// username alone. Badges, links, and playlist tracks keep insertion order.
pub fn render(profile: &Profile, username: &str, autoplay: bool) -> PreviewDocument {
    let placeholder = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    let avatar = AvatarView {
        effect_class: profile
            .profile_picture
            .as_ref()
            .map(|_| effect_class(profile.profile_effect).to_string()),
        image: profile.profile_picture.clone(),
        placeholder,
    };

    let badges = profile
        .badges
        .iter()
        .take(BADGE_DISPLAY_LIMIT)
        .filter_map(|id| {
            badge_emoji(id).map(|emoji| BadgeView {
                id: id.clone(),
                emoji: emoji.to_string(),
            })
        })
        .collect();

    let social_links = profile
        .social_links
        .iter()
        .take(LINK_DISPLAY_LIMIT)
        .map(|link| SocialLinkView {
            id: link.id.clone(),
            platform: link.platform,
            url: link.url.clone(),
            label: link.label.clone(),
            icon: link
                .platform
                .as_str()
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default(),
        })
        .collect();

    let background_video = profile.background_video.clone().map(|url| MediaView {
        url,
        autoplay,
        looped: true,
        muted: true,
    });
    let background_music = profile.background_music.clone().map(|url| MediaView {
        url,
        autoplay,
        looped: true,
        muted: false,
    });

    PreviewDocument {
        username: username.to_string(),
        font_class: font_class(profile.font_style).to_string(),
        avatar,
        badges,
        social_links,
        background_video,
        background_music,
        special_effects: profile.special_effects.clone(),
        music_stats: profile.music_stats.clone(),
        playlists: profile.playlists.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{FontStyle, Platform, Profile, ProfileEffect, ProfilePatch};

    fn profile() -> Profile {
        Profile::new(Id::generate())
    }

    #[test]
    fn test_font_style_drives_document_font_class() {
        let mut p = profile();
        assert_eq!(render(&p, "ada", false).font_class, "font-sans");

        p.apply(ProfilePatch {
            font_style: Some(FontStyle::Elegant),
            ..Default::default()
        });
        let doc = render(&p, "ada", false);
        assert_eq!(doc.font_class, "font-serif");
        // Only the typeface changed.
        assert!(doc.badges.is_empty());
        assert!(doc.avatar.image.is_none());
    }

    #[test]
    fn test_avatar_effect_only_with_picture() {
        let mut p = profile();
        p.profile_effect = ProfileEffect::Neon;

        let doc = render(&p, "ada", false);
        assert!(doc.avatar.effect_class.is_none());
        assert_eq!(doc.avatar.placeholder, "A");

        p.profile_picture = Some("https://cdn.example/a.png".to_string());
        let doc = render(&p, "ada", false);
        assert_eq!(doc.avatar.effect_class.as_deref(), Some("ring-neon"));
    }

    #[test]
    fn test_first_three_badges_in_insertion_order() {
        let mut p = profile();
        for badge in ["trophy", "star", "crown", "fire", "heart"] {
            p.toggle_badge(badge);
        }
        let doc = render(&p, "ada", false);
        let ids: Vec<&str> = doc.badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["trophy", "star", "crown"]);
        assert_eq!(doc.badges[0].emoji, "\u{1f3c6}");
    }

    #[test]
    fn test_unknown_badge_ids_are_skipped() {
        let mut p = profile();
        p.badges = vec!["star".to_string(), "meteor".to_string(), "crown".to_string()];
        let doc = render(&p, "ada", false);
        let ids: Vec<&str> = doc.badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["star", "crown"]);
    }

    #[test]
    fn test_first_four_links_with_initial_icon() {
        let mut p = profile();
        for platform in [
            Platform::Twitter,
            Platform::Github,
            Platform::Youtube,
            Platform::Twitch,
            Platform::Website,
        ] {
            p.add_social_link(platform, "https://example.com".to_string(), "link".to_string());
        }
        let doc = render(&p, "ada", false);
        assert_eq!(doc.social_links.len(), LINK_DISPLAY_LIMIT);
        assert_eq!(doc.social_links[0].icon, "T");
        assert_eq!(doc.social_links[1].icon, "G");
    }

    #[test]
    fn test_background_media_flags() {
        let mut p = profile();
        p.background_video = Some("https://cdn.example/v.mp4".to_string());
        p.background_music = Some("https://cdn.example/m.mp3".to_string());

        let editor = render(&p, "ada", false);
        let video = editor.background_video.unwrap();
        assert!(video.muted && video.looped && !video.autoplay);

        let public = render(&p, "ada", true);
        let music = public.background_music.unwrap();
        assert!(music.autoplay && music.looped && !music.muted);
    }

    #[test]
    fn test_empty_username_placeholder() {
        let doc = render(&profile(), "", false);
        assert_eq!(doc.avatar.placeholder, "?");
    }
}
