pub mod auth;
pub mod media;
pub mod profile;
pub mod session;
pub mod users;
