use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::SavedPassword;
use crate::routes::session::CurrentUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SavePasswordRequest {
    pub password: String,
    /// Strength score computed by the trainer client
    pub score: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Saved passwords of the current user, newest first
pub async fn list_saved_passwords(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<SavedPassword>>> {
    let saved = state
        .store
        .get_saved_passwords(user.id, params.limit)
        .await?;

    Ok(Json(saved))
}

pub async fn save_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<SavePasswordRequest>,
) -> Result<(StatusCode, Json<SavedPassword>)> {
    if payload.password.is_empty() {
        return Err(AppError::InvalidInput("Password must not be empty".to_string()));
    }

    let saved = state
        .store
        .save_password(user.id, &payload.password, payload.score)
        .await?;

    tracing::info!(user_id = user.id, password_id = saved.id, "Password saved");

    Ok((StatusCode::CREATED, Json(saved)))
}

/// Delete one of the current user's saved passwords
///
/// Ids that do not exist or belong to another user report `deleted: false`.
pub async fn delete_saved_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(password_id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let deleted = state
        .store
        .delete_saved_password(password_id, user.id)
        .await?;

    Ok(Json(DeleteResponse { deleted }))
}
