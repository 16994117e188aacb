use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Path value selecting a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Create a SQLite connection pool
///
/// Foreign keys are enabled on every connection. An in-memory database lives
/// on a single connection that is never recycled, since each new connection
/// would see an empty database.
pub async fn create_pool(database_path: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Creating database connection pool for: {}", database_path);

    let pool = if database_path == IN_MEMORY {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        // Create parent directory if it doesn't exist
        if let Some(parent) = Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!("Failed to create database directory: {}", e);
                    sqlx::Error::Io(e)
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
