use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::{
        app_error::{AppError, AppResult},
        dto::session::{SessionDTO, SessionValidationResult},
        interactors::session::ValidateSessionInteractor,
    },
    infra::config::{AppConfig, SessionConfig},
};

pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    interactor: ValidateSessionInteractor,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let session_config = &config.session;
    let session_id = extract_session_id(&request, &session_config.cookie_name)?;
    let dto = SessionDTO {
        id: session_id,
        max_lifetime: session_config.max_lifetime,
        idle_timeout: session_config.idle_timeout,
    };
    let result = interactor.execute(dto).await?;
    match result.status {
        SessionValidationResult::Valid(user_id) => {
            request.extensions_mut().insert(AuthUser {
                user_id: user_id.value.to_string(),
            });
        }
        SessionValidationResult::Expired | SessionValidationResult::Invalid => {
            return Err(AppError::InvalidCredentials);
        }
    }

    Ok(next.run(request).await)
}

fn extract_session_id(request: &Request, cookie_name: &str) -> AppResult<String> {
    let cookie_header = request
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidCredentials)?;

    for cookie in cookie_header.split(";") {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", cookie_name)) {
            return Ok(value.to_string());
        }
    }

    Err(AppError::InvalidCredentials)
}

pub fn build_session_cookie(session_id: &str, config: &SessionConfig) -> String {
    let secure = if config.cookie_secure { "; Secure" } else { "" };
    let http_only = if config.cookie_http_only { "; HttpOnly" } else { "" };
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax{}{}",
        config.cookie_name, session_id, config.max_lifetime, secure, http_only
    )
}

pub fn build_logout_cookie(config: &SessionConfig) -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", config.cookie_name)
}
