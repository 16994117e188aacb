//! Credential store: user registration, lookup and password verification.

use super::{fault, now_timestamp, Store};
use crate::constants::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD};
use crate::error::{StoreError, StoreResult};
use crate::models::{User, UserSummary};
use crate::security::{generate_salt, hash_password, verify_password};

impl Store {
    /// Register a new user
    ///
    /// Returns `StoreError::AlreadyExists` when the email is taken.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> StoreResult<User> {
        let salt = generate_salt();
        let password_hash = hash_password(&salt, password);
        let created_at = now_timestamp();

        let result = sqlx::query(
            "INSERT INTO users (name, email, password_hash, salt, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(&password_hash)
        .bind(&salt)
        .bind(&created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match StoreError::from_insert(e) {
            StoreError::AlreadyExists => {
                tracing::info!("Registration rejected: email already exists");
                StoreError::AlreadyExists
            }
            StoreError::Database(e) => fault("create_user")(e),
        })?;

        let user = User {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            salt,
            created_at,
        };

        tracing::info!(user_id = user.id, "New user registered");

        Ok(user)
    }

    pub async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, salt, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(fault("get_user_by_email"))
    }

    pub async fn get_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, salt, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(fault("get_user_by_id"))
    }

    /// Check credentials, returning the user on success
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn verify_user(&self, email: &str, password: &str) -> StoreResult<Option<User>> {
        let Some(user) = self.get_user_by_email(email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Ok(None);
        };

        if verify_password(&user.salt, password, &user.password_hash) {
            Ok(Some(user))
        } else {
            tracing::debug!(user_id = user.id, "Login attempt with wrong password");
            Ok(None)
        }
    }

    /// All users, most recently created first
    pub async fn list_users(&self) -> StoreResult<Vec<UserSummary>> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT id, name, email, created_at FROM users ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(fault("list_users"))
    }

    /// Create the development admin account if it does not exist yet
    pub(crate) async fn ensure_default_admin(&self) -> StoreResult<()> {
        tracing::warn!(
            "SEED_DEFAULT_ADMIN is enabled: {} has a well-known password. Never enable this in production.",
            DEFAULT_ADMIN_EMAIL
        );

        if self.get_user_by_email(DEFAULT_ADMIN_EMAIL).await?.is_some() {
            return Ok(());
        }

        match self
            .create_user(DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
            .await
        {
            // Another process seeded it between the lookup and the insert
            Ok(_) | Err(StoreError::AlreadyExists) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
