use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    adapter::http::{
        app_error_impl::ErrorResponse,
        middleware::{
            auth::{build_logout_cookie, build_session_cookie},
            extractor::AuthUser,
        },
        schema::auth::{LoginRequest, MessageResponse},
        validation::ValidJson,
    },
    application::{
        app_error::AppResult,
        dto::{auth::LoginDTO, id::IdDTO},
        interactors::auth::{LoginInteractor, LogoutInteractor},
    },
    infra::config::AppConfig,
};

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session cookie set", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(config): State<Arc<AppConfig>>,
    interactor: LoginInteractor,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> AppResult<Response> {
    let dto = LoginDTO {
        email: payload.email.to_string(),
        password: payload.password.value().to_string(),
    };
    let result = interactor.execute(dto).await?;
    let cookie = build_session_cookie(&result.session_id, &config.session);

    let mut response = (
        StatusCode::OK,
        Json(MessageResponse {
            message: "success".to_string(),
        }),
    )
        .into_response();
    response.headers_mut().insert(SET_COOKIE, cookie.parse()?);
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "All sessions for the account removed", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("cookieAuth" = [])),
    tag = "auth"
)]
pub async fn logout(
    State(config): State<Arc<AppConfig>>,
    auth_user: AuthUser,
    interactor: LogoutInteractor,
) -> AppResult<Response> {
    interactor
        .execute(IdDTO {
            id: auth_user.user_id,
        })
        .await?;
    let cookie = build_logout_cookie(&config.session);

    let mut response = (
        StatusCode::OK,
        Json(MessageResponse {
            message: "success".to_string(),
        }),
    )
        .into_response();
    response.headers_mut().insert(SET_COOKIE, cookie.parse()?);
    Ok(response)
}
