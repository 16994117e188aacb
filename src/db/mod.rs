pub mod content;
pub mod pool;
pub mod schema;
pub mod seed;
pub mod users;

use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};

pub use pool::{create_pool, IN_MEMORY};
pub use schema::SQLITE_INIT;

/// Startup options applied once when a store is opened
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrap {
    /// Create the well-known development admin account if it is missing
    pub seed_default_admin: bool,
}

/// Handle to the trainer database
///
/// Holds both the credential store (users) and the content store (saved
/// passwords and tips). Cloning is cheap and shares the underlying pool.
/// The only constructors run schema creation and seeding, so every handle
/// is bootstrapped exactly once.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (or create) the database at `path` and bootstrap it
    ///
    /// `":memory:"` opens a private in-memory database.
    pub async fn open(path: &str, bootstrap: Bootstrap) -> StoreResult<Self> {
        tracing::info!("Opening database at: {}", path);

        let pool = create_pool(path).await.map_err(fault("open"))?;
        let store = Self { pool };

        store.init_schema().await?;
        store.seed_tips().await?;
        if bootstrap.seed_default_admin {
            store.ensure_default_admin().await?;
        }

        tracing::info!("Database initialized successfully");

        Ok(store)
    }

    /// Open an isolated in-memory store with default bootstrap
    pub async fn memory() -> StoreResult<Self> {
        Self::open(IN_MEMORY, Bootstrap::default()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check the database answers a trivial query
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(fault("ping"))?;
        Ok(())
    }

    /// Close all connections. Clones of this handle become unusable.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database closed");
    }

    async fn init_schema(&self) -> StoreResult<()> {
        // sqlx::query runs a single statement, so execute the DDL piecewise
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s)
                .execute(&self.pool)
                .await
                .map_err(fault("init_schema"))?;
        }
        Ok(())
    }
}

/// Current UTC time in the format stored in `created_at` columns
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Log a database fault at the point it is produced and wrap it
pub(crate) fn fault(operation: &'static str) -> impl Fn(sqlx::Error) -> StoreError {
    move |e| {
        tracing::error!(operation, error = %e, "Store operation failed");
        StoreError::Database(e)
    }
}
