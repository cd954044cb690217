//! HTTP handlers for the chat service.

pub mod chat;
pub mod health;
pub mod users;

pub use chat::post_chat;
pub use health::{health_check, readiness_check};
pub use users::{get_user, register_user};
