use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    adapter::http::{
        app_error_impl::ErrorResponse,
        middleware::extractor::AuthUser,
        schema::profile::{AddSocialLinkRequest, ProfileResponse},
        validation::{AppJson, ValidJson},
    },
    application::{
        app_error::AppResult,
        dto::{
            id::IdDTO,
            profile::{
                AddSocialLinkDTO, RemoveSocialLinkDTO, ToggleBadgeDTO, ToggleEffectDTO,
                UpdateProfileDTO,
            },
        },
        interactors::profile::{
            AddSocialLinkInteractor, GetPreviewInteractor, GetProfileInteractor,
            RemoveSocialLinkInteractor, ToggleBadgeInteractor, ToggleEffectInteractor,
            UpdateProfileInteractor,
        },
    },
    domain::{entities::profile::{ProfilePatch, SocialLink}, preview::PreviewDocument},
};

#[utoipa::path(
    get,
    path = "/profiles/me",
    responses(
        (status = 200, description = "Customization document", body = ProfileResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "profiles"
)]
pub async fn get_profile(
    auth_user: AuthUser,
    interactor: GetProfileInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor
        .execute(IdDTO {
            id: auth_user.user_id,
        })
        .await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    patch,
    path = "/profiles/me",
    request_body = ProfilePatch,
    responses(
        (status = 200, description = "Merged document", body = ProfileResponse),
        (status = 400, description = "Unknown badge or effect id, or badge cap exceeded", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "profiles"
)]
pub async fn update_profile(
    auth_user: AuthUser,
    interactor: UpdateProfileInteractor,
    AppJson(patch): AppJson<ProfilePatch>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor
        .execute(UpdateProfileDTO {
            id: auth_user.user_id,
            patch,
        })
        .await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/profiles/me/badges/{badge_id}/toggle",
    params(("badge_id" = String, Path, description = "Badge catalog id")),
    responses(
        (status = 200, description = "Document after the toggle", body = ProfileResponse),
        (status = 400, description = "Unknown badge id", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "profiles"
)]
pub async fn toggle_badge(
    auth_user: AuthUser,
    interactor: ToggleBadgeInteractor,
    Path(badge_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor
        .execute(ToggleBadgeDTO {
            id: auth_user.user_id,
            badge_id,
        })
        .await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/profiles/me/effects/{effect_id}/toggle",
    params(("effect_id" = String, Path, description = "Special-effect catalog id")),
    responses(
        (status = 200, description = "Document after the toggle", body = ProfileResponse),
        (status = 400, description = "Unknown effect id", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "profiles"
)]
pub async fn toggle_effect(
    auth_user: AuthUser,
    interactor: ToggleEffectInteractor,
    Path(effect_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor
        .execute(ToggleEffectDTO {
            id: auth_user.user_id,
            effect_id,
        })
        .await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/profiles/me/social-links",
    request_body = AddSocialLinkRequest,
    responses(
        (status = 200, description = "Stored link with its generated id", body = SocialLink),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "profiles"
)]
pub async fn add_social_link(
    auth_user: AuthUser,
    interactor: AddSocialLinkInteractor,
    ValidJson(payload): ValidJson<AddSocialLinkRequest>,
) -> AppResult<impl IntoResponse> {
    let link = interactor
        .execute(AddSocialLinkDTO {
            id: auth_user.user_id,
            platform: payload.platform,
            url: payload.url,
            label: payload.label,
        })
        .await?;
    Ok((StatusCode::OK, Json(link)))
}

#[utoipa::path(
    delete,
    path = "/profiles/me/social-links/{link_id}",
    params(("link_id" = String, Path, description = "Link id returned on creation")),
    responses(
        (status = 200, description = "Document after the removal", body = ProfileResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "profiles"
)]
pub async fn remove_social_link(
    auth_user: AuthUser,
    interactor: RemoveSocialLinkInteractor,
    Path(link_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = interactor
        .execute(RemoveSocialLinkDTO {
            id: auth_user.user_id,
            link_id,
        })
        .await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/profiles/me/preview",
    responses(
        (status = 200, description = "Rendered preview, media autoplay off", body = PreviewDocument),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "profiles"
)]
pub async fn get_preview(
    auth_user: AuthUser,
    interactor: GetPreviewInteractor,
) -> AppResult<impl IntoResponse> {
    let preview = interactor
        .execute(IdDTO {
            id: auth_user.user_id,
        })
        .await?;
    Ok((StatusCode::OK, Json(preview)))
}
