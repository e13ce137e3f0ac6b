//! Configuration validation.

use crate::config::schema::{Config, ShiftConfig, MINUTES_PER_DAY};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use ridepool::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref shift) = config.shift {
            Self::validate_shift(shift)?;
        }

        if let Some(minutes) = config.min_prep_minutes {
            if minutes < 0 {
                return Err(Error::Validation {
                    field: "min_prep_minutes".into(),
                    message: "Preparation time cannot be negative".into(),
                });
            }
        }

        if config.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        Ok(())
    }

    fn validate_shift(shift: &ShiftConfig) -> Result<()> {
        if shift.latest_end_minutes > MINUTES_PER_DAY {
            return Err(Error::Validation {
                field: "shift.latest_end_minutes".into(),
                message: format!("Must be at most {MINUTES_PER_DAY}"),
            });
        }

        if shift.earliest_start_minutes >= shift.latest_end_minutes {
            return Err(Error::Validation {
                field: "shift".into(),
                message: "earliest_start_minutes must be before latest_end_minutes".into(),
            });
        }

        Ok(())
    }
}
