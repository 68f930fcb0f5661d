use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::application::app_error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidId(_)
            | AppError::UnknownBadge(_)
            | AppError::UnknownEffect(_)
            | AppError::BadgeLimitExceeded
            | AppError::InvalidUpload(_) => (StatusCode::BAD_REQUEST, Some(self.to_string())),
            AppError::Validation(_) | AppError::JsonRejection(_) | AppError::Multipart(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(self.to_string()))
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, Some("Invalid Credentials".to_string()))
            }
            AppError::UserAlreadyExists => (StatusCode::CONFLICT, Some(self.to_string())),
            AppError::ProfileNotFound => (StatusCode::NOT_FOUND, Some(self.to_string())),
            AppError::PasswordHashError
            | AppError::DatabaseError(_)
            | AppError::StorageError(_)
            | AppError::HeaderError(_) => {
                error!("Internal error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let message = match message {
            Some(msg) => msg,
            None => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}
