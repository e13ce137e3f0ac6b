//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use ridepool::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_user_config(Some(Path::new("/tmp/ridepool"))).unwrap();
/// println!("config file present: {}", config.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `{data_dir}/config.yaml`, or the default data directory's file
    /// when `data_dir` is `None`.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<Config>> {
        let path = Self::config_path(data_dir)?;
        if !path.exists() {
            return Ok(None);
        }
        log::debug!("loading configuration from {}", path.display());
        Self::load_file(&path).map(Some)
    }

    /// Loads and parses one YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("Failed to read configuration file: {e}"),
        })?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Path of the configuration file for `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is given and the home directory
    /// cannot be determined.
    pub fn config_path(data_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => crate::database::default_data_dir()?,
        };
        Ok(dir.join(CONFIG_FILE))
    }
}
