//! User profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user profile, keyed by the external identity provider's uid.
///
/// The uid is an opaque string; no verification of its authenticity happens
/// here (authentication is the identity provider's job).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub firebase_uid: String,
    pub email: String,
    pub target_days: i32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new profile. Email is normalized to lowercase.
    pub fn new(firebase_uid: String, email: String, target_days: i32) -> Self {
        Self {
            firebase_uid,
            email: email.trim().to_lowercase(),
            target_days,
            created_at: Utc::now(),
        }
    }
}
