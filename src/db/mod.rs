// Public API - what other modules can use
pub use memory::InMemoryStore;
pub use session::DbSession;

// Internal modules
mod memory;
mod schema;
mod session;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::shared::AppError;

/// Connection settings for the relational store
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Private in-memory database, shared by a single pooled connection
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://banco.db".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Handle to the connection pool. Cheap to clone; passed explicitly through `AppState`.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    #[instrument(skip(config), fields(url = %config.url))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            max_connections = config.max_connections,
            "Connecting to database"
        );

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| {
                warn!(error = %e, "Invalid database URL");
                AppError::DatabaseError(e.to_string())
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout);

        // An in-memory database lives only as long as its connection
        if config.is_in_memory() {
            debug!("In-memory database, keeping connections alive indefinitely");
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            warn!(error = %e, "Failed to connect to database");
            AppError::ServiceUnavailable(e.to_string())
        })?;

        info!("Database connection pool ready");
        Ok(Self { pool })
    }

    /// Creates the tables if they do not exist yet
    #[instrument(skip(self))]
    pub async fn init_schema(&self) -> Result<(), AppError> {
        schema::create_tables(&self.pool).await
    }

    /// Opens a per-request session. Released when the returned value is dropped.
    pub async fn session(&self) -> Result<DbSession, AppError> {
        DbSession::acquire(&self.pool).await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory_and_init_schema() {
        let database = Database::connect(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        database.init_schema().await.unwrap();

        // Idempotent
        database.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_session_after_close_is_unavailable() {
        let database = Database::connect(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        database.close().await;

        let result = database.session().await;
        assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_dropped_session_returns_to_pool() {
        let config = DatabaseConfig {
            acquire_timeout: Duration::from_secs(2),
            ..DatabaseConfig::in_memory()
        };
        let database = Database::connect(&config).await.unwrap();

        let first = database.session().await.unwrap();
        drop(first);

        // Pool holds a single connection, so this only succeeds if it was released
        let second = database.session().await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_held_session_blocks_until_timeout() {
        let config = DatabaseConfig {
            acquire_timeout: Duration::from_millis(200),
            ..DatabaseConfig::in_memory()
        };
        let database = Database::connect(&config).await.unwrap();

        let _held = database.session().await.unwrap();
        let result = database.session().await;
        assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    }
}
