//! SQLite storage for vehicles, availability windows and tour events.
//!
//! # Examples
//!
//! ```no_run
//! use ridepool::database::{Database, DatabaseConfig};
//! use ridepool::{Capacities, CompanyId, Interval, NewAvailability};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/ridepool.db")).unwrap();
//! let taxi = Database::create_vehicle(db.connection(), CompanyId(1), &Capacities::new(3, 0, 0, 0)).unwrap();
//!
//! let window = NewAvailability { vehicle: taxi.id, interval: Interval::new(0, 3_600_000).unwrap() };
//! Database::create_availability(db.connection(), &window).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE, DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
