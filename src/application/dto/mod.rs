pub mod auth;
pub mod id;
pub mod media;
pub mod profile;
pub mod session;
pub mod user;
