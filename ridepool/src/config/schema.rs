//! Configuration schema definitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::availability::MINUTE_MS;

/// Default busy wait for the database write lock, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Default preparation time before availability can be changed.
pub const DEFAULT_MIN_PREP_MINUTES: i64 = 60;

/// Default earliest shift start, minutes after midnight (05:00).
pub const DEFAULT_SHIFT_START_MINUTES: u32 = 5 * 60;

/// Default latest shift end, minutes after midnight (22:00).
pub const DEFAULT_SHIFT_END_MINUTES: u32 = 22 * 60;

/// Minutes in one day; the upper bound for shift settings.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Complete configuration structure.
///
/// Every field is optional so that files, environment variables and
/// programmatic overrides can be layered; the accessors fill in defaults.
///
/// # Examples
///
/// ```
/// use ridepool::config::{Config, ShiftConfig};
///
/// let config = Config {
///     shift: Some(ShiftConfig { earliest_start_minutes: 360, latest_end_minutes: 1260 }),
///     ..Default::default()
/// };
/// assert_eq!(config.shift_bounds_ms(), (6 * 3_600_000, 21 * 3_600_000));
/// assert_eq!(config.min_prep_ms(), 3_600_000);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the database write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// How long before its start availability freezes (minutes).
    pub min_prep_minutes: Option<i64>,

    /// Daily window in which availability may be added.
    pub shift: Option<ShiftConfig>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// The lock wait as a [`Duration`].
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// The preparation time in milliseconds.
    #[must_use]
    pub fn min_prep_ms(&self) -> i64 {
        self.min_prep_minutes
            .unwrap_or(DEFAULT_MIN_PREP_MINUTES)
            .saturating_mul(MINUTE_MS)
    }

    /// Shift start and end as millisecond offsets from midnight.
    #[must_use]
    pub fn shift_bounds_ms(&self) -> (i64, i64) {
        let shift = self.shift.unwrap_or_default();
        (
            i64::from(shift.earliest_start_minutes) * MINUTE_MS,
            i64::from(shift.latest_end_minutes) * MINUTE_MS,
        )
    }

    /// Whether the database may be created on first use.
    #[must_use]
    pub fn autoinit(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }
}

/// The daily shift window, in minutes after UTC midnight.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShiftConfig {
    /// Earliest time availability may start.
    pub earliest_start_minutes: u32,

    /// Latest time availability may end.
    pub latest_end_minutes: u32,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            earliest_start_minutes: DEFAULT_SHIFT_START_MINUTES,
            latest_end_minutes: DEFAULT_SHIFT_END_MINUTES,
        }
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use ridepool::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    #[default]
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(format!(
                "Invalid output format: '{s}' (expected json, csv, tsv or table)"
            )),
        }
    }
}
