use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
///
/// `message` is optional at the wire level so a missing field maps to the
/// documented 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body for a successful chat completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}
