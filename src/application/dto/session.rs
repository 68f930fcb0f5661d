use crate::domain::entities::{id::Id, user::User};

#[derive(Debug)]
pub struct SessionDTO {
    pub id: String,
    pub max_lifetime: i64,
    pub idle_timeout: i64,
}

#[derive(Debug, Clone)]
pub struct GetSessionStatusDTO {
    pub status: SessionValidationResult,
}

#[derive(Debug, Clone)]
pub enum SessionValidationResult {
    Valid(Id<User>),
    Expired,
    Invalid,
}
