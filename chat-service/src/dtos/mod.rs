pub mod chat;
pub mod users;

pub use chat::{ChatRequest, ChatResponse};
pub use users::{RegisterRequest, UserResponse};
