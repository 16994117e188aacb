use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors produced by the credential and content stores
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Convert an insert failure, mapping unique-constraint violations to `AlreadyExists`
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::AlreadyExists
            }
            _ => StoreError::Database(err),
        }
    }
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Store(StoreError::AlreadyExists) => (
                StatusCode::CONFLICT,
                json!({ "error": "A user with this email already exists" }),
            ),
            AppError::Store(StoreError::Database(ref e)) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            AppError::InvalidInput(ref msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "errors": errors }),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Invalid email or password" }),
            ),
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
