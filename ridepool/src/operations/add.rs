//! Adding availability to a vehicle.

use rusqlite::Connection;

use crate::availability::{allowed_times, alterable_timeframe, NewAvailability, HOUR_MS};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::ids::{CompanyId, VehicleId};
use crate::interval::{subtract_all, Interval, UnixtimeMs};

use super::executor::{ExecutionResult, PlanExecutor};
use super::plan::{OperationPlan, PlanAction};

/// Options for adding availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddAvailabilityOptions {
    /// The vehicle gaining availability.
    pub vehicle: VehicleId,
    /// The company that must own the vehicle.
    pub company: CompanyId,
    /// The requested window.
    pub interval: Interval,
    /// The current time.
    pub now: UnixtimeMs,
    /// How far ahead of `now` availability becomes editable.
    pub min_prep_ms: i64,
    /// Earliest daily shift start, as an offset from UTC midnight.
    pub shift_start_ms: i64,
    /// Latest daily shift end, as an offset from UTC midnight.
    pub shift_end_ms: i64,
}

impl AddAvailabilityOptions {
    /// Creates options with a one-hour preparation time and shifts between
    /// 05:00 and 22:00.
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
            shift_start_ms: 5 * HOUR_MS,
            shift_end_ms: 22 * HOUR_MS,
        }
    }

    /// Sets the preparation time.
    #[must_use]
    pub const fn with_min_prep_ms(mut self, min_prep_ms: i64) -> Self {
        self.min_prep_ms = min_prep_ms;
        self
    }

    /// Sets the daily shift bounds.
    #[must_use]
    pub const fn with_shift_ms(mut self, start: i64, end: i64) -> Self {
        self.shift_start_ms = start;
        self.shift_end_ms = end;
        self
    }
}

/// Plans the rows to insert for an addition.
pub struct AddAvailabilityPlan {
    options: AddAvailabilityOptions,
}

impl AddAvailabilityPlan {
    /// Creates a planner.
    #[must_use]
    pub const fn new(options: AddAvailabilityOptions) -> Self {
        Self { options }
    }

    /// Builds the plan.
    ///
    /// The window is clipped to the alterable timeframe and to the daily
    /// shift windows. Time the vehicle already has is skipped, so stored
    /// rows never overlap; each remaining piece becomes one insert.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the vehicle does not exist or belongs
    /// to another company, or a database error.
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let AddAvailabilityOptions {
            vehicle,
            company,
            interval,
            now,
            min_prep_ms,
            shift_start_ms,
            shift_end_ms,
        } = self.options;
        let mut plan = OperationPlan::new(format!(
            "Add availability {interval} to vehicle {vehicle}"
        ));

        if !Database::vehicle_belongs_to(conn, vehicle, company)? {
            return Err(Error::NotFound {
                resource: format!("vehicle {vehicle} of company {company}"),
            });
        }

        let Some(wanted) = interval.intersect(&alterable_timeframe(now, min_prep_ms)) else {
            return Ok(plan.add_warning(format!("{interval} is too close to now to be changed")));
        };

        let pieces: Vec<Interval> = allowed_times(
            wanted.start_time(),
            wanted.end_time(),
            shift_start_ms,
            shift_end_ms,
        )
        .iter()
        .filter_map(|shift| shift.intersect(&wanted))
        .collect();
        if pieces.is_empty() {
            return Ok(plan.add_warning(format!("{wanted} lies outside the daily shift hours")));
        }

        let existing: Vec<Interval> = Database::overlapping_availability(conn, vehicle, &wanted)?
            .into_iter()
            .map(|row| row.interval)
            .collect();
        let new_rows = subtract_all(&pieces, &existing);
        if new_rows.is_empty() {
            plan = plan.add_warning(format!("vehicle {vehicle} is already available in {wanted}"));
        }
        Ok(plan.add_actions(new_rows.into_iter().map(|interval| {
            PlanAction::InsertAvailability(NewAvailability { vehicle, interval })
        })))
    }
}

/// Plans and applies an addition in one `IMMEDIATE` transaction.
///
/// # Errors
///
/// Returns any error from planning, executing or committing.
pub fn add_availability(
    db: &mut Database,
    options: AddAvailabilityOptions,
) -> Result<ExecutionResult> {
    let tx = db.begin_transaction()?;
    let plan = AddAvailabilityPlan::new(options).build_plan(&tx)?;
    let result = PlanExecutor::new(&tx).execute(&plan)?;
    tx.commit()?;
    Ok(result)
}
