use axum::{response::Html, Json};
use utoipa::{
    openapi::{
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        OpenApi as OpenApiDoc,
    },
    Modify, OpenApi,
};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::{auth, media, profile, public, user},
    schema::{
        auth::{LoginRequest, MessageResponse},
        id::IdResponse,
        media::UploadResponse,
        profile::{AddSocialLinkRequest, ProfileResponse},
        user::{CreateUserRequest, GetUserResponse},
        ValidPassword,
    },
};
use crate::domain::entities::profile::{
    CurrentlyPlaying, FontStyle, GenreShare, MusicStats, Platform, Playlist, PlaylistTrack,
    ProfileEffect, ProfilePatch, SocialLink, TopArtist, TopTrack,
};
use crate::domain::preview::{AvatarView, BadgeView, MediaView, PreviewDocument, SocialLinkView};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session_id"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        user::register,
        user::get_me,
        auth::login,
        auth::logout,
        profile::get_profile,
        profile::update_profile,
        profile::toggle_badge,
        profile::toggle_effect,
        profile::add_social_link,
        profile::remove_social_link,
        profile::get_preview,
        public::get_public_profile,
        media::upload_media
    ),
    components(
        schemas(
            ErrorResponse,
            LoginRequest,
            MessageResponse,
            IdResponse,
            CreateUserRequest,
            GetUserResponse,
            ValidPassword,
            ProfileResponse,
            ProfilePatch,
            AddSocialLinkRequest,
            SocialLink,
            Platform,
            ProfileEffect,
            FontStyle,
            MusicStats,
            TopArtist,
            TopTrack,
            GenreShare,
            CurrentlyPlaying,
            Playlist,
            PlaylistTrack,
            PreviewDocument,
            AvatarView,
            BadgeView,
            SocialLinkView,
            MediaView,
            UploadResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ApiDoc;
    use utoipa::OpenApi;

    #[rstest]
    fn test_openapi_document_builds_with_all_schemas() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("openapi serializes");

        let schemas = doc
            .pointer("/components/schemas")
            .and_then(|v| v.as_object())
            .expect("component schemas");
        assert!(schemas.contains_key("ValidPassword"));
        assert!(schemas.contains_key("ProfilePatch"));
        assert!(schemas.contains_key("PreviewDocument"));

        assert!(doc.pointer("/paths/~1users~1register/post").is_some());
        assert!(doc
            .pointer("/components/securitySchemes/cookieAuth")
            .is_some());
    }
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
