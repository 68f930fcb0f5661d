use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    adapter::http::{
        app_error_impl::ErrorResponse,
        middleware::extractor::AuthUser,
        schema::{
            id::IdResponse,
            user::{CreateUserRequest, GetUserResponse},
        },
        validation::ValidJson,
    },
    application::{
        app_error::AppResult,
        dto::{id::IdDTO, user::CreateUserDTO},
        interactors::users::{CreateUserInteractor, GetMeInteractor},
    },
};

#[utoipa::path(
    post,
    path = "/users/register",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Account created", body = IdResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn register(
    interactor: CreateUserInteractor,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        username: payload.username,
        email: payload.email.to_string(),
        password: payload.password.value().to_string(),
    };
    let user_id = interactor.execute(dto).await?;
    let response = IdResponse { id: user_id.id };
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Current account", body = GetUserResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "users"
)]
pub async fn get_me(auth_user: AuthUser, interactor: GetMeInteractor) -> AppResult<impl IntoResponse> {
    let dto = IdDTO {
        id: auth_user.user_id,
    };
    let user = interactor.execute(dto).await?;
    let response = GetUserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
    };
    Ok((StatusCode::OK, Json(response)))
}
