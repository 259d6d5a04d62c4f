//! # Connection Lifecycle
//!
//! Every store operation opens its own connection, runs against it and
//! closes it again. There is no pool.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Operation, One Connection                      │
//! │                                                                         │
//! │  ScopedConnection::open(config)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  statement(s) against conn()   ← autocommit, or one explicit tx        │
//! │       │                                                                 │
//! │       ▼  (always, success or failure)                                  │
//! │  release()                     ← closes the connection                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  caller sees the statement result                                      │
//! │                                                                         │
//! │  Dropped without release() (panic, cancelled future)?                  │
//! │  sqlx closes the connection when it is dropped.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let mut handle = ScopedConnection::open(&config).await?;
//! let result = sqlx::query("SELECT 1").execute(handle.conn()).await;
//! handle.release().await;
//! result?;
//! ```
//!
//! The statement result is held until after `release()` so that an error
//! never skips the close.

use sqlx::{Connection, SqliteConnection};
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::{DbError, DbResult};

/// An open connection owned by exactly one store operation.
#[derive(Debug)]
pub struct ScopedConnection {
    conn: SqliteConnection,
}

impl ScopedConnection {
    /// Opens a connection to the configured database file.
    ///
    /// Creates the file if it doesn't exist.
    pub async fn open(config: &StoreConfig) -> DbResult<Self> {
        let conn = SqliteConnection::connect_with(&config.connect_options())
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(path = %config.path().display(), "Connection opened");
        Ok(ScopedConnection { conn })
    }

    /// The underlying connection, for use as a sqlx executor.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Closes the connection.
    ///
    /// A failure while closing is logged and otherwise ignored; by then the
    /// operation's own statement has already completed.
    pub async fn release(self) {
        if let Err(e) = self.conn.close().await {
            warn!(error = %e, "Failed to close connection cleanly");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("fresh.db"));
        assert!(!config.database_exists());

        let mut handle = ScopedConnection::open(&config).await.unwrap();
        let result = sqlx::query("SELECT 1").execute(handle.conn()).await;
        handle.release().await;

        assert!(result.is_ok());
        assert!(config.database_exists());
    }

    #[tokio::test]
    async fn test_open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("no-such-dir").join("catalog.db"));

        let err = ScopedConnection::open(&config).await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[tokio::test]
    async fn test_connection_released_after_failed_statement() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path().join("errors.db"));

        let mut handle = ScopedConnection::open(&config).await.unwrap();
        let result = sqlx::query("SELECT * FROM missing_table")
            .execute(handle.conn())
            .await;
        handle.release().await;

        let err: DbError = result.unwrap_err().into();
        assert!(matches!(err, DbError::QueryFailed(_)));

        // A new connection to the same file still works.
        let mut handle = ScopedConnection::open(&config).await.unwrap();
        let result = sqlx::query("SELECT 1").execute(handle.conn()).await;
        handle.release().await;
        assert!(result.is_ok());
    }
}
