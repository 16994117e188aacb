pub mod auth;
pub mod health;
pub mod passwords;
pub mod session;
pub mod tips;
pub mod validation;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use auth::{current_user, login, logout, register_user};
pub use health::health_check;
pub use passwords::{delete_saved_password, list_saved_passwords, save_password};
pub use session::CurrentUser;
pub use tips::{search_tips, tip_categories};
pub use validation::validate_registration;

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/register", post(register_user))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/me", get(current_user))
        .route(
            "/api/passwords",
            get(list_saved_passwords).post(save_password),
        )
        .route("/api/passwords/:id", delete(delete_saved_password))
        .route("/api/tips", get(search_tips))
        .route("/api/tips/categories", get(tip_categories))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
