use axum::{
    extract::{Multipart, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    adapter::http::{app_error_impl::ErrorResponse, middleware::extractor::AuthUser, schema::media::UploadResponse},
    application::{
        app_error::{AppError, AppResult},
        dto::media::{MediaPurpose, UploadMediaDTO},
        interactors::media::UploadMediaInteractor,
    },
};

#[utoipa::path(
    post,
    path = "/media/{purpose}",
    params(("purpose" = String, Path, description = "profile-picture, background-video or background-music")),
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Public URL stored in the matching profile field", body = UploadResponse),
        (status = 400, description = "Unknown purpose or unusable file", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "media"
)]
pub async fn upload_media(
    auth_user: AuthUser,
    interactor: UploadMediaInteractor,
    Path(purpose): Path<String>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let purpose = MediaPurpose::from_route(&purpose)
        .ok_or_else(|| AppError::InvalidUpload(format!("unknown purpose: {purpose}")))?;

    let field = multipart
        .next_field()
        .await?
        .ok_or_else(|| AppError::InvalidUpload("missing file field".to_string()))?;
    let file_name = field
        .file_name()
        .map(str::to_owned)
        .ok_or_else(|| AppError::InvalidUpload("missing file name".to_string()))?;
    let content_type = field
        .content_type()
        .map(str::to_owned)
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let data = field.bytes().await?;

    let dto = UploadMediaDTO {
        id: auth_user.user_id,
        purpose,
        file_name,
        content_type,
        data,
    };
    let url = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(UploadResponse { url })))
}
