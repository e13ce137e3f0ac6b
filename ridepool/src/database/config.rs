//! Database configuration and path resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "RIDEPOOL_DATA_DIR";

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "ridepool.db";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use ridepool::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/ridepool.db")
///     .with_busy_timeout(Duration::from_millis(250));
/// assert_eq!(config.busy_timeout, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long a writer waits for another writer's lock before the
    /// operation fails with a concurrent-modification error.
    pub busy_timeout: Duration,
    /// Whether to create the database (and its directory) if missing.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a configuration with a 5 second busy timeout, auto-create
    /// enabled and read-write access.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creating a missing database.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Opens the database read-only. Implies no auto-create.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.ridepool`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".ridepool"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the database path.
///
/// 1. `$RIDEPOOL_DATA_DIR/ridepool.db` if the variable is set
/// 2. `~/.ridepool/ridepool.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory is needed but unknown.
pub fn resolve_database_path() -> Result<PathBuf> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) => Ok(PathBuf::from(dir).join(DATABASE_FILE)),
        None => Ok(default_data_dir()?.join(DATABASE_FILE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_read_only_disables_create() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
        assert!(!DatabaseConfig::new("/tmp/x.db").without_auto_create().auto_create);
    }

    #[test]
    fn test_default_data_dir() {
        if let Ok(dir) = default_data_dir() {
            assert!(dir.ends_with(".ridepool"));
        }
    }

    #[test]
    #[serial]
    fn test_resolve_database_path() {
        let saved = std::env::var_os(DATA_DIR_ENV);

        std::env::set_var(DATA_DIR_ENV, "/custom/data");
        assert_eq!(
            resolve_database_path().unwrap(),
            PathBuf::from("/custom/data/ridepool.db")
        );

        std::env::remove_var(DATA_DIR_ENV);
        if let Ok(path) = resolve_database_path() {
            assert!(path.ends_with(".ridepool/ridepool.db"));
        }

        if let Some(value) = saved {
            std::env::set_var(DATA_DIR_ENV, value);
        }
    }
}
