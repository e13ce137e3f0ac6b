//! Removing time from a vehicle's availability.

use rusqlite::Connection;

use crate::availability::{alterable_timeframe, reconcile_availability, HOUR_MS};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::ids::{CompanyId, VehicleId};
use crate::interval::{Interval, UnixtimeMs};

use super::executor::{ExecutionResult, PlanExecutor};
use super::plan::OperationPlan;

/// Options for removing availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveAvailabilityOptions {
    /// The vehicle whose availability shrinks.
    pub vehicle: VehicleId,
    /// The company that must own the vehicle.
    pub company: CompanyId,
    /// The time to remove.
    pub interval: Interval,
    /// The current time.
    pub now: UnixtimeMs,
    /// How far ahead of `now` availability becomes editable.
    pub min_prep_ms: i64,
}

impl RemoveAvailabilityOptions {
    /// Creates options with a one-hour preparation time.
    #[must_use]
    pub const fn new(
        vehicle: VehicleId,
        company: CompanyId,
        interval: Interval,
        now: UnixtimeMs,
    ) -> Self {
        Self {
            vehicle,
            company,
            interval,
            now,
            min_prep_ms: HOUR_MS,
        }
    }

    /// Sets the preparation time.
    #[must_use]
    pub const fn with_min_prep_ms(mut self, min_prep_ms: i64) -> Self {
        self.min_prep_ms = min_prep_ms;
        self
    }
}

/// Plans the row changes for a removal.
pub struct RemoveAvailabilityPlan {
    options: RemoveAvailabilityOptions,
}

impl RemoveAvailabilityPlan {
    /// Creates a planner.
    #[must_use]
    pub const fn new(options: RemoveAvailabilityOptions) -> Self {
        Self { options }
    }

    /// Builds the plan from the current rows.
    ///
    /// The removal is first clipped to the alterable timeframe; if nothing
    /// of it remains, the plan is empty and carries a warning. Then the
    /// vehicle's ownership is checked and the overlapping rows are
    /// reconciled.
    ///
    /// Call this on the transaction that will execute the plan so the rows
    /// cannot change in between.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the vehicle does not exist or belongs
    /// to another company, or a database error.
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let RemoveAvailabilityOptions {
            vehicle,
            company,
            interval,
            now,
            min_prep_ms,
        } = self.options;
        let description = format!("Remove availability {interval} from vehicle {vehicle}");

        let Some(to_remove) = interval.intersect(&alterable_timeframe(now, min_prep_ms)) else {
            return Ok(OperationPlan::new(description)
                .add_warning(format!("{interval} is too close to now to be changed")));
        };

        if !Database::vehicle_belongs_to(conn, vehicle, company)? {
            return Err(Error::NotFound {
                resource: format!("vehicle {vehicle} of company {company}"),
            });
        }

        let overlapping = Database::overlapping_availability(conn, vehicle, &to_remove)?;
        let mut plan = reconcile_availability(&overlapping, &to_remove).into_plan(description);
        if to_remove != interval {
            plan = plan.add_warning(format!("clipped to {to_remove}"));
        }
        if plan.is_empty() {
            plan = plan.add_warning(format!("vehicle {vehicle} has no availability in {to_remove}"));
        }
        Ok(plan)
    }
}

/// Plans and applies a removal in one `IMMEDIATE` transaction.
///
/// A lost race surfaces as [`Error::ConcurrentModification`]; retrying means
/// calling this again.
///
/// # Errors
///
/// Returns any error from planning, executing or committing.
pub fn remove_availability(
    db: &mut Database,
    options: RemoveAvailabilityOptions,
) -> Result<ExecutionResult> {
    let tx = db.begin_transaction()?;
    let plan = RemoveAvailabilityPlan::new(options).build_plan(&tx)?;
    let result = PlanExecutor::new(&tx).execute(&plan)?;
    tx.commit()?;
    Ok(result)
}
