//! Password Trainer Server Library
//!
//! Credential store, content store and the JSON HTTP layer on top of them.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;

pub use config::Config;
pub use db::{Bootstrap, Store};
pub use error::{AppError, Result, StoreError, StoreResult};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
    /// Encryption key for the session cookie
    pub key: Key,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    ///
    /// Without `session_secret` a random key is used, so sessions do not
    /// survive a restart. A secret shorter than 64 bytes is rejected.
    pub fn new(store: Store, config: Config) -> std::result::Result<Self, String> {
        let key = match config.session_secret.as_deref() {
            Some(secret) => Key::try_from(secret.as_bytes())
                .map_err(|_| "SESSION_SECRET must be at least 64 bytes".to_string())?,
            None => Key::generate(),
        };

        Ok(Self { store, config, key })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
