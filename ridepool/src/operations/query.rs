//! Insertion queries against stored tours.

use rusqlite::Connection;
use serde::Serialize;

use crate::capacity::Capacities;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::ids::VehicleId;
use crate::insertion::InsertionScan;
use crate::vehicle::{TourEvent, Vehicle};

/// Asks where a request could join a vehicle's tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionQuery {
    /// The vehicle to scan.
    pub vehicle: VehicleId,
    /// What the request needs on board.
    pub required: Capacities,
}

/// The answer to an [`InsertionQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertionOutcome {
    /// The scanned vehicle.
    pub vehicle: Vehicle,
    /// The tour, in scheduled order. Range positions index into this.
    pub events: Vec<TourEvent>,
    /// Where the request fits.
    pub scan: InsertionScan,
}

impl InsertionQuery {
    /// Creates a query.
    #[must_use]
    pub const fn new(vehicle: VehicleId, required: Capacities) -> Self {
        Self { vehicle, required }
    }

    /// Loads the vehicle and its tour and runs the scan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown vehicle, or a database
    /// error.
    pub fn run(&self, conn: &Connection) -> Result<InsertionOutcome> {
        let vehicle = Database::get_vehicle(conn, self.vehicle)?.ok_or_else(|| Error::NotFound {
            resource: format!("vehicle {}", self.vehicle),
        })?;
        let events = Database::events_for_vehicle(conn, vehicle.id)?;
        let scan = InsertionScan::run(&vehicle.capacities, &self.required, &events);
        log::debug!(
            "vehicle {}: {} event(s), feasible: {}",
            vehicle.id,
            events.len(),
            scan.is_feasible()
        );
        Ok(InsertionOutcome {
            vehicle,
            events,
            scan,
        })
    }
}
