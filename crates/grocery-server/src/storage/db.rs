//! SQLite database layer (embedded, single local file)

use super::error::Result as StorageResult;
use super::session::DbSession;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::time::Duration;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Bounds how long a request waits for a free connection.
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

    /// Bounds how long a write waits for another connection's write lock.
    const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

    pub async fn new(database_path: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Self::BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Self::ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, creating tables...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to create database tables")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    /// Private in-memory database with the full schema.
    ///
    /// Pinned to a single connection that never expires, since every SQLite
    /// connection to `:memory:` opens a fresh, empty database.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        use std::str::FromStr;

        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Stores table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stores (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                latitude REAL,
                longitude REAL,
                address TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Products table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                brand TEXT,
                category TEXT NOT NULL,
                unit TEXT,
                size REAL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Prices table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS prices (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                store_id INTEGER NOT NULL REFERENCES stores (id),
                product_id INTEGER NOT NULL REFERENCES products (id),
                price REAL NOT NULL,
                last_updated DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        for index in [
            "CREATE INDEX IF NOT EXISTS ix_stores_name ON stores (name)",
            "CREATE INDEX IF NOT EXISTS ix_products_name ON products (name)",
            "CREATE INDEX IF NOT EXISTS ix_products_category ON products (category)",
        ] {
            sqlx::query(index).execute(pool).await?;
        }

        Ok(())
    }

    /// Opens a request-scoped session. The connection goes back to the pool
    /// when the session is dropped.
    pub async fn session(&self) -> StorageResult<DbSession> {
        let conn = self.pool.acquire().await?;
        Ok(DbSession::new(conn))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
