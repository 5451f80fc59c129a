//! Connection handling for the student database file.
//!
//! Both constructors share [`Database::connect`]: build the pool from a set
//! of connect options, then bring the schema up to date with the embedded
//! migrations.

use std::path::Path;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::error::StoreError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Pool size for file-backed databases.
const FILE_POOL_SIZE: u32 = 5;

/// A migrated pool over one SQLite database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the database file at `path`, creating it and any missing parent
    /// directories on first use.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)?,
            _ => {}
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let db = Self::connect(options, FILE_POOL_SIZE).await?;
        tracing::debug!(path = %path.display(), "Opened student database");
        Ok(db)
    }

    /// A private database that lives as long as this value.
    ///
    /// Each in-memory connection is its own database, so the pool holds a
    /// single connection that never idles out.
    pub async fn new_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new().in_memory(true);
        Self::connect(options, 1).await
    }

    async fn connect(options: SqliteConnectOptions, max_connections: u32) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        MIGRATOR.run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for open connections to finish and close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
