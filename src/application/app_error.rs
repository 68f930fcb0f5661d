use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::header::InvalidHeaderValue;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::entities::profile::MAX_BADGES;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("username or email already taken")]
    UserAlreadyExists,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("unknown badge: {0}")]
    UnknownBadge(String),
    #[error("unknown effect: {0}")]
    UnknownEffect(String),
    #[error("at most {MAX_BADGES} badges can be selected")]
    BadgeLimitExceeded,
    #[error("invalid upload: {0}")]
    InvalidUpload(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
    #[error("password hashing failed")]
    PasswordHashError,
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),
    #[error("storage error: {0}")]
    StorageError(String),
    #[error(transparent)]
    HeaderError(#[from] InvalidHeaderValue),
}

pub type AppResult<T> = Result<T, AppError>;
