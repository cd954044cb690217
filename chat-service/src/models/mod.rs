//! Domain models for the chat service.

pub mod turn;
pub mod user;

pub use turn::{Role, Turn};
pub use user::User;
