//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};

use ridepool::{Capacities, CompanyId, Database, DatabaseConfig, Interval, NewAvailability, Vehicle};

/// A database file inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
#[allow(dead_code)]
pub fn temp_database() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ridepool.db");
    (dir, path)
}

/// Opens the database at `path` with default settings.
#[allow(dead_code)]
pub fn open(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

/// Registers a vehicle with `seats` passenger seats.
#[allow(dead_code)]
pub fn taxi(db: &Database, company: i64, seats: u32) -> Vehicle {
    Database::create_vehicle(db.connection(), CompanyId(company), &Capacities::new(seats, 0, 0, 0))
        .unwrap()
}

/// Stores one availability row.
#[allow(dead_code)]
pub fn make_available(db: &Database, vehicle: &Vehicle, start: i64, end: i64) {
    Database::create_availability(
        db.connection(),
        &NewAvailability {
            vehicle: vehicle.id,
            interval: iv(start, end),
        },
    )
    .unwrap();
}

/// The vehicle's stored intervals, in start order.
#[allow(dead_code)]
pub fn stored(db: &Database, vehicle: &Vehicle) -> Vec<Interval> {
    Database::list_availability(db.connection(), Some(vehicle.id))
        .unwrap()
        .into_iter()
        .map(|row| row.interval)
        .collect()
}

/// Shorthand for a valid interval.
#[allow(dead_code)]
pub fn iv(start: i64, end: i64) -> Interval {
    Interval::new(start, end).unwrap()
}
