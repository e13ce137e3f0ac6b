//! Environment variable handling for configuration overrides.
//!
//! `RIDEPOOL_*` variables override values read from the configuration file.

use std::env;
use std::str::FromStr;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use ridepool::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies every set `RIDEPOOL_*` variable to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(seconds) = Self::parsed("RIDEPOOL_MAXIMUM_LOCK_WAIT_SECONDS")? {
            config.maximum_lock_wait_seconds = Some(seconds);
        }

        if let Some(minutes) = Self::parsed("RIDEPOOL_MIN_PREP_MINUTES")? {
            config.min_prep_minutes = Some(minutes);
        }

        let start = Self::parsed("RIDEPOOL_SHIFT_START_MINUTES")?;
        let end = Self::parsed("RIDEPOOL_SHIFT_END_MINUTES")?;
        if start.is_some() || end.is_some() {
            let shift = config.shift.get_or_insert_with(Default::default);
            if let Some(start) = start {
                shift.earliest_start_minutes = start;
            }
            if let Some(end) = end {
                shift.latest_end_minutes = end;
            }
        }

        if let Ok(val) = env::var("RIDEPOOL_OUTPUT_FORMAT") {
            config.output_format =
                Some(OutputFormat::from_str(&val).map_err(|message| Error::Validation {
                    field: "RIDEPOOL_OUTPUT_FORMAT".into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var("RIDEPOOL_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("RIDEPOOL_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    fn parsed<T: FromStr>(name: &str) -> Result<Option<T>> {
        env::var(name)
            .ok()
            .map(|val| {
                val.trim().parse().map_err(|_| Error::Validation {
                    field: name.into(),
                    message: format!("Invalid number: '{val}'"),
                })
            })
            .transpose()
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
