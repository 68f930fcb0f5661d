use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    adapter::http::app_error_impl::ErrorResponse,
    application::{
        app_error::AppResult, dto::profile::UsernameDTO,
        interactors::profile::GetPublicProfileInteractor,
    },
    domain::preview::PreviewDocument,
};

#[utoipa::path(
    get,
    path = "/profiles/{username}",
    params(("username" = String, Path, description = "Unique username")),
    responses(
        (status = 200, description = "Rendered public page, media autoplay on", body = PreviewDocument),
        (status = 404, description = "No such username", body = ErrorResponse)
    ),
    tag = "public"
)]
pub async fn get_public_profile(
    interactor: GetPublicProfileInteractor,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let preview = interactor.execute(UsernameDTO { username }).await?;
    Ok((StatusCode::OK, Json(preview)))
}
