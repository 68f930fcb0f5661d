pub mod auth;
pub mod media;
pub mod profile;
pub mod public;
pub mod user;
