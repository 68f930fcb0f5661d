use crate::domain::entities::profile::{Platform, ProfilePatch};

#[derive(Debug)]
pub struct UpdateProfileDTO {
    pub id: String,
    pub patch: ProfilePatch,
}

#[derive(Debug)]
pub struct ToggleBadgeDTO {
    pub id: String,
    pub badge_id: String,
}

#[derive(Debug)]
pub struct ToggleEffectDTO {
    pub id: String,
    pub effect_id: String,
}

#[derive(Debug)]
pub struct AddSocialLinkDTO {
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub label: String,
}

#[derive(Debug)]
pub struct RemoveSocialLinkDTO {
    pub id: String,
    pub link_id: String,
}

#[derive(Debug)]
pub struct UsernameDTO {
    pub username: String,
}
