use crate::dtos::{RegisterRequest, UserResponse};
use crate::models::User;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

/// `POST /register` - create a user profile record.
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;

    let user = User::new(body.firebase_uid, body.email, body.target_days);
    state.db.insert_user(&user).await?;

    tracing::info!(firebase_uid = %user.firebase_uid, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// `GET /user/:uid` - look up a profile by identity-provider uid.
pub async fn get_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .db
        .find_user(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("User not found")))?;

    Ok(Json(UserResponse::from(user)))
}
