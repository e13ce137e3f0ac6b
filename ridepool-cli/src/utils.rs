//! Utility functions for CLI operations.
//!
//! Configuration loading, database opening, time parsing and the shared
//! table/JSON/CSV/TSV writer used by the list commands.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::CliError;
use ridepool::database::{default_data_dir, DATABASE_FILE};
use ridepool::{Capacities, Config, ConfigBuilder, Database, DatabaseConfig, Interval, UnixtimeMs};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` or `~/.ridepool`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration from the data directory and environment.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigBuilder::new()
        .with_data_dir(resolve_data_dir(global)?)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE);

    if !db_path.exists() && (global.disable_autoinit || !config.autoinit()) {
        return Err(CliError::NoDataDirectory);
    }

    let busy_timeout = match global.busy_timeout {
        Some(seconds) => Duration::from_secs(seconds.into()),
        None => config.lock_wait(),
    };

    Database::open(DatabaseConfig::new(db_path).with_busy_timeout(busy_timeout))
        .map_err(CliError::from)
}

/// Parse a point in time given as Unix milliseconds or RFC 3339.
pub fn parse_time(s: &str) -> Result<UnixtimeMs, String> {
    if let Ok(ms) = s.parse::<i64>() {
        return Ok(ms);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| format!("'{s}' is neither Unix milliseconds nor an RFC 3339 time"))
}

/// Build an interval from two parsed times.
pub fn interval(start: UnixtimeMs, end: UnixtimeMs) -> Result<Interval, CliError> {
    Interval::new(start, end).map_err(CliError::from)
}

/// The current time, unless overridden with `--now`.
pub fn now_or(now: Option<UnixtimeMs>) -> UnixtimeMs {
    now.unwrap_or_else(|| Utc::now().timestamp_millis())
}

/// Format Unix milliseconds as RFC 3339 UTC.
pub fn format_time(ms: UnixtimeMs) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms).map_or_else(
        || ms.to_string(),
        |dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Capacity flags shared by commands that take a capacity vector.
#[derive(Args, Debug, Clone, Copy)]
pub struct CapacityArgs {
    /// Passenger seats
    #[arg(long, default_value_t = 0)]
    pub passengers: u32,

    /// Wheelchair places
    #[arg(long, default_value_t = 0)]
    pub wheelchairs: u32,

    /// Bike racks
    #[arg(long, default_value_t = 0)]
    pub bikes: u32,

    /// Luggage slots
    #[arg(long, default_value_t = 0)]
    pub luggage: u32,
}

impl From<CapacityArgs> for Capacities {
    fn from(args: CapacityArgs) -> Self {
        Capacities::new(args.passengers, args.wheelchairs, args.bikes, args.luggage)
    }
}

/// Output format for list commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl OutputFormat {
    /// `--format` if given, else the configured format, else a table.
    pub fn resolve(flag: Option<Self>, config: &Config) -> Self {
        flag.unwrap_or(match config.output_format.unwrap_or_default() {
            ridepool::config::OutputFormat::Table => Self::Table,
            ridepool::config::OutputFormat::Json => Self::Json,
            ridepool::config::OutputFormat::Csv => Self::Csv,
            ridepool::config::OutputFormat::Tsv => Self::Tsv,
        })
    }
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Write records to stdout.
///
/// JSON output serializes `records` directly; the other formats print one
/// row per record, produced by `row`, under `headers`.
pub fn print_records<T: Serialize>(
    format: OutputFormat,
    headers: &[&str],
    records: &[T],
    row: impl Fn(&T) -> Vec<String>,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            let header_line = headers
                .iter()
                .map(|s| s.to_uppercase())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(handle, "{header_line}")?;
            for record in records {
                writeln!(handle, "{}", row(record).join("\t"))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, records).map_err(std::io::Error::other)?;
            writeln!(handle)?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Csv { b',' } else { b'\t' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(handle);
            writer.write_record(headers).map_err(csv_error)?;
            for record in records {
                writer.write_record(row(record)).map_err(csv_error)?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

/// Print a plan's warnings to stderr unless `--quiet`.
pub fn report_warnings(global: &GlobalOptions, warnings: &[String]) {
    if !global.quiet {
        for warning in warnings {
            eprintln!("Warning: {warning}");
        }
    }
}
