pub mod entities;
pub mod preview;
