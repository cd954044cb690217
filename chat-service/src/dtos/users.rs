use crate::models::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Firebase UID is required"))]
    pub firebase_uid: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(range(min = 1, message = "Target days must be at least 1"))]
    pub target_days: i32,
}

/// User profile as returned to callers.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub firebase_uid: String,
    pub email: String,
    pub target_days: i32,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            firebase_uid: user.firebase_uid,
            email: user.email,
            target_days: user.target_days,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
