//! Shared helpers for database unit tests.

use tempfile::tempdir;

use crate::capacity::Capacities;
use crate::database::{Database, DatabaseConfig};
use crate::ids::CompanyId;
use crate::interval::Interval;
use crate::vehicle::Vehicle;

/// Creates a database in a temporary directory.
///
/// # Panics
///
/// Panics if the directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the database's lifetime
    std::mem::forget(dir);

    db
}

/// Registers a three-seat taxi for `company`.
///
/// # Panics
///
/// Panics if the insert fails.
#[must_use]
pub fn create_test_vehicle(db: &Database, company: i64) -> Vehicle {
    Database::create_vehicle(
        db.connection(),
        CompanyId(company),
        &Capacities::new(3, 0, 0, 0),
    )
    .unwrap()
}

/// Shorthand for a valid interval.
///
/// # Panics
///
/// Panics if `start >= end`.
#[must_use]
pub fn iv(start: i64, end: i64) -> Interval {
    Interval::new(start, end).unwrap()
}
