//! SQLite storage gateway: connection pool, schema, transactions.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

use crate::error::BoardError;

const CREATE_EVENTS: &str = "\
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    datetime TEXT
)";

const CREATE_RESPONSES: &str = "\
CREATE TABLE IF NOT EXISTS responses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event_id TEXT,
    name TEXT,
    available_start TEXT,
    available_end TEXT,
    description TEXT,
    FOREIGN KEY (event_id) REFERENCES events(id)
)";

/// Connection settings for [`Storage::connect`].
#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// SQLite connection string.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// How long a caller waits for a free connection.
    pub acquire_timeout: Duration,
}

impl StorageSettings {
    /// Settings for a private in-memory database.
    #[must_use]
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

/// Handle to the relational store.
///
/// Cloning is cheap; all clones share one `SqlitePool`. Every query leases
/// a connection from the pool and returns it when the lease is dropped, so
/// connections are released on every exit path of a request.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Opens the store described by `settings`, creating the database file
    /// if it does not exist.
    ///
    /// An in-memory database lives only as long as its connection, so it is
    /// pinned to a single connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] if the URL is malformed or
    /// the database cannot be opened.
    pub async fn connect(settings: &StorageSettings) -> Result<Self, BoardError> {
        // `responses.event_id` integrity is kept by the service layer, not
        // the store.
        let options = SqliteConnectOptions::from_str(&settings.url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(settings.max_connections.max(1))
            .acquire_timeout(settings.acquire_timeout);
        if settings.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        tracing::info!(url = %settings.url, "storage connected");
        Ok(Self { pool })
    }

    /// Creates the `events` and `responses` tables if they are absent.
    /// Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), BoardError> {
        sqlx::query(CREATE_EVENTS).execute(&self.pool).await?;
        sqlx::query(CREATE_RESPONSES).execute(&self.pool).await?;
        tracing::debug!("schema ensured");
        Ok(())
    }

    /// Starts a transaction. Dropping it without `commit` rolls back.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, BoardError> {
        Ok(self.pool.begin().await?)
    }

    /// Round-trips a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] if the store does not answer.
    pub async fn ping(&self) -> Result<(), BoardError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection. Subsequent queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("storage closed");
    }
}
