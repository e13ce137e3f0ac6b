#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # ridepool
//!
//! Capacity-constrained ride pooling: where a new request can join a
//! vehicle's tour, and how vehicle availability changes when time is taken
//! away from it.
//!
//! ## Core Types
//!
//! - [`Capacities`] and [`Load`]: what a vehicle carries and what is on board
//! - [`insertion_ranges`] and [`InsertionScan`]: feasible insertion windows
//! - [`Interval`]: half-open time ranges and their algebra
//! - [`reconcile_availability`] and [`free_windows`]: availability updates
//! - [`Database`] and [`operations`]: transactional storage of the above
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use ridepool::{insertion_ranges, Capacities, Event, Range};
//!
//! // A three-seat taxi already carrying two passengers for a while
//! let taxi = Capacities::new(3, 0, 0, 0);
//! let two = Capacities::new(2, 0, 0, 0);
//! let tour = [Event::pickup(two), Event::dropoff(two)];
//!
//! // Another two passengers only fit before or after that ride
//! assert_eq!(
//!     insertion_ranges(&taxi, &two, &tour),
//!     vec![
//!         Range { earliest_pickup: 0, latest_dropoff: 0 },
//!         Range { earliest_pickup: 2, latest_dropoff: 2 },
//!     ]
//! );
//! ```

pub mod availability;
pub mod capacity;
pub mod config;
pub mod database;
pub mod error;
pub mod ids;
pub mod insertion;
pub mod interval;
pub mod logging;
pub mod operations;
pub mod vehicle;

// Re-export key types at crate root for convenience
pub use availability::{
    free_windows, merge_per_vehicle, reconcile_availability, Availability, BookedSpan,
    NewAvailability, Reconciliation,
};
pub use capacity::{Capacities, Load};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use ids::{AvailabilityId, CompanyId, EventId, VehicleId};
pub use insertion::{feasible_indices, insertion_ranges, CapacityEvent, Event, InsertionScan, Range};
pub use interval::{Interval, IntervalRelation, UnixtimeMs};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    add_availability, remove_availability, AddAvailabilityOptions, ExecutionResult,
    InsertionQuery, OperationPlan, PlanAction, PlanExecutor, RemoveAvailabilityOptions,
};
pub use vehicle::{NewTourEvent, TourEvent, Vehicle};
