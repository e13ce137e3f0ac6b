//! Configuration system for ridepool.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from the following sources (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`RIDEPOOL_*`)
//! 3. `config.yaml` in the data directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use ridepool::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config { min_prep_minutes: Some(30), ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.min_prep_ms(), 30 * 60_000);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, ShiftConfig};
pub use validator::ConfigValidator;
