#[derive(Debug)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct GetSessionIdDTO {
    pub session_id: String,
}
