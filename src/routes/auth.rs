use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::UserSummary;
use crate::routes::session::{end_session, start_session, CurrentUser};
use crate::routes::validation::validate_registration;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Confirmation, must equal `password`
    pub password2: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Register a new user and start a session
///
/// Returns 400 with every failed rule when the form is invalid and
/// 409 Conflict if the email is already registered.
pub async fn register_user(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, PrivateCookieJar, Json<AuthResponse>)> {
    if let Err(errors) = validate_registration(
        &payload.name,
        &payload.email,
        &payload.password,
        &payload.password2,
    ) {
        tracing::info!("Registration form rejected: {} problem(s)", errors.len());
        return Err(AppError::Validation(errors));
    }

    let user = state
        .store
        .create_user(payload.name.trim(), &payload.email, &payload.password)
        .await?;

    let jar = start_session(jar, &user.email);

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            success: true,
            user: user.into(),
        }),
    ))
}

/// Verify credentials and start a session
pub async fn login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(PrivateCookieJar, Json<AuthResponse>)> {
    let user = state
        .store
        .verify_user(&payload.email, &payload.password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    tracing::info!(user_id = user.id, "User logged in");

    let jar = start_session(jar, &user.email);

    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            user: user.into(),
        }),
    ))
}

pub async fn logout(jar: PrivateCookieJar) -> (PrivateCookieJar, Json<LogoutResponse>) {
    (end_session(jar), Json(LogoutResponse { success: true }))
}

/// Profile of the logged-in user
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserSummary> {
    Json(user.into())
}
