//! Availability operations using the plan-execute pattern.
//!
//! Planning reads the rows an operation touches and lists the changes it
//! would make; execution applies the list. Both run on the same
//! `IMMEDIATE` transaction, so no other writer can change the rows in
//! between. A plan can also be executed as a dry run.
//!
//! # Examples
//!
//! ```no_run
//! use ridepool::operations::{PlanExecutor, RemoveAvailabilityOptions, RemoveAvailabilityPlan};
//! use ridepool::{CompanyId, Database, DatabaseConfig, Interval, VehicleId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/ridepool.db")).unwrap();
//! let options = RemoveAvailabilityOptions::new(
//!     VehicleId(1),
//!     CompanyId(1),
//!     Interval::new(1_700_000_000_000, 1_700_003_600_000).unwrap(),
//!     1_699_990_000_000,
//! );
//!
//! let tx = db.begin_transaction().unwrap();
//! let plan = RemoveAvailabilityPlan::new(options).build_plan(&tx).unwrap();
//! let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
//! tx.commit().unwrap();
//! println!("{} action(s)", result.actions_taken.len());
//! ```

pub mod add;
pub mod executor;
pub mod init;
pub mod plan;
pub mod query;
pub mod remove;

#[cfg(test)]
mod proptests;

pub use add::{add_availability, AddAvailabilityOptions, AddAvailabilityPlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use query::{InsertionOutcome, InsertionQuery};
pub use remove::{remove_availability, RemoveAvailabilityOptions, RemoveAvailabilityPlan};
