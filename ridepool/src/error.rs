//! Error types for the ridepool library.
//!
//! This module provides the error hierarchy for all operations in the
//! ridepool library, using `thiserror` for ergonomic error handling.
//!
//! Infeasible insertions are not errors: the scanner reports them as an
//! empty range list. Errors are reserved for malformed input, storage
//! failures, and lost races at the transactional write boundary.

use thiserror::Error;

use crate::interval::UnixtimeMs;

/// Result type alias for operations that may fail with a ridepool error.
///
/// # Examples
///
/// ```
/// use ridepool::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the ridepool library.
#[derive(Debug, Error)]
pub enum Error {
    /// A capacity vector contained a negative value.
    #[error("invalid capacity for '{field}': {value} is negative")]
    InvalidCapacity {
        /// The capacity dimension that was rejected.
        field: &'static str,
        /// The offending value.
        value: i64,
    },

    /// An interval did not have a strictly positive duration.
    #[error("invalid interval [{start}, {end}): start must be before end")]
    InvalidInterval {
        /// Start of the rejected interval (Unix milliseconds).
        start: UnixtimeMs,
        /// End of the rejected interval (Unix milliseconds).
        end: UnixtimeMs,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A concurrent transaction touched the same rows first.
    ///
    /// The caller should re-read and recompute, then retry.
    #[error("concurrent modification: {details}")]
    ConcurrentModification {
        /// Details about the conflict.
        details: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON (de)serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        // SQLITE_BUSY / SQLITE_LOCKED surface once the busy timeout is spent:
        // another writer holds the vehicle's rows.
        if let rusqlite::Error::SqliteFailure(ref sqlite_err, ref message) = err {
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ) {
                return Self::ConcurrentModification {
                    details: message
                        .clone()
                        .unwrap_or_else(|| sqlite_err.to_string()),
                };
            }
        }
        Self::Database(err)
    }
}

impl Error {
    /// Returns `true` if the whole read-reconcile-write cycle may be retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use ridepool::Error;
    ///
    /// let err = Error::ConcurrentModification { details: "busy".into() };
    /// assert!(err.is_retryable());
    ///
    /// let err = Error::NotFound { resource: "vehicle 7".into() };
    /// assert!(!err.is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConcurrentModification { .. })
    }

    /// Returns `true` for malformed input (capacities or intervals).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity { .. } | Self::InvalidInterval { .. } | Self::Validation { .. }
        )
    }
}
