//! # Store Configuration
//!
//! Where the database file lives and how each connection to it is opened.
//!
//! ## Example
//! ```rust,ignore
//! let config = StoreConfig::new("./data/stockroom.db")
//!     .busy_timeout(Duration::from_secs(10));
//! let store = ProductStore::initialize(config).await?;
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default time a connection waits on a locked database before failing.
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Store configuration.
///
/// No default path: every store is built from an
/// explicit location.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long a connection waits for SQLite's file lock.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Journal mode applied to each connection.
    /// Default: WAL
    pub journal_mode: SqliteJournalMode,

    /// Synchronous level applied to each connection.
    /// Default: NORMAL
    pub synchronous: SqliteSynchronous,
}

impl StoreConfig {
    /// Creates a configuration for the database file at `path`.
    ///
    /// The file is created on first connection if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            journal_mode: SqliteJournalMode::Wal,
            synchronous: SqliteSynchronous::Normal,
        }
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets the journal mode.
    pub fn journal_mode(mut self, mode: SqliteJournalMode) -> Self {
        self.journal_mode = mode;
        self
    }

    /// Sets the synchronous level.
    pub fn synchronous(mut self, level: SqliteSynchronous) -> Self {
        self.synchronous = level;
        self
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        &self.database_path
    }

    /// Whether the database file is already present on disk.
    pub fn database_exists(&self) -> bool {
        self.database_path.exists()
    }

    /// Builds the sqlx options used for every connection.
    pub(crate) fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            .journal_mode(self.journal_mode)
            .synchronous(self.synchronous)
            .busy_timeout(self.busy_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StoreConfig::new("/tmp/stockroom-test.db");

        assert_eq!(config.path(), Path::new("/tmp/stockroom-test.db"));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
        assert!(matches!(config.journal_mode, SqliteJournalMode::Wal));
        assert!(matches!(config.synchronous, SqliteSynchronous::Normal));
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("catalog.db")
            .busy_timeout(Duration::from_millis(250))
            .journal_mode(SqliteJournalMode::Delete)
            .synchronous(SqliteSynchronous::Full);

        assert_eq!(config.busy_timeout, Duration::from_millis(250));
        assert!(matches!(config.journal_mode, SqliteJournalMode::Delete));
        assert!(matches!(config.synchronous, SqliteSynchronous::Full));
    }

    #[test]
    fn test_database_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.db");
        let config = StoreConfig::new(&path);

        assert!(!config.database_exists());
        std::fs::write(&path, b"").unwrap();
        assert!(config.database_exists());
    }
}
