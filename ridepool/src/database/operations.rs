//! Row-level reads and writes for vehicles, availability and events.
//!
//! Every function takes a plain [`Connection`] so it works the same on the
//! database handle and inside a [`rusqlite::Transaction`].

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::availability::{Availability, NewAvailability};
use crate::capacity::Capacities;
use crate::error::Result;
use crate::ids::{AvailabilityId, CompanyId, EventId, VehicleId};
use crate::interval::Interval;
use crate::vehicle::{NewTourEvent, TourEvent, Vehicle};

use super::connection::Database;
use super::schema::{
    DELETE_AVAILABILITY, INSERT_AVAILABILITY, INSERT_EVENT, INSERT_VEHICLE, LIST_AVAILABILITY,
    LIST_VEHICLES, SELECT_EVENTS_FOR_VEHICLE, SELECT_OVERLAPPING_AVAILABILITY, SELECT_VEHICLE,
    UPSERT_AVAILABILITY, VEHICLE_BELONGS_TO,
};

/// Reads four capacity columns starting at `first`.
fn capacities_at(row: &Row<'_>, first: usize) -> rusqlite::Result<Capacities> {
    Capacities::from_signed(
        row.get(first)?,
        row.get(first + 1)?,
        row.get(first + 2)?,
        row.get(first + 3)?,
    )
    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(first, Type::Integer, Box::new(e)))
}

/// Expects: id, company, passengers, wheelchairs, bikes, luggage
fn row_to_vehicle(row: &Row<'_>) -> rusqlite::Result<Vehicle> {
    Ok(Vehicle {
        id: row.get(0)?,
        company: row.get(1)?,
        capacities: capacities_at(row, 2)?,
    })
}

/// Expects: id, vehicle, start_time, end_time
fn row_to_availability(row: &Row<'_>) -> rusqlite::Result<Availability> {
    let interval = Interval::new(row.get(2)?, row.get(3)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Integer, Box::new(e)))?;
    Ok(Availability {
        id: row.get(0)?,
        vehicle: row.get(1)?,
        interval,
    })
}

/// Expects: id, vehicle, scheduled_time, is_pickup, then four capacities
fn row_to_event(row: &Row<'_>) -> rusqlite::Result<TourEvent> {
    Ok(TourEvent {
        id: row.get(0)?,
        vehicle: row.get(1)?,
        scheduled_time: row.get(2)?,
        is_pickup: row.get(3)?,
        capacities: capacities_at(row, 4)?,
    })
}

impl Database {
    /// Registers a vehicle for `company`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ridepool::database::{Database, DatabaseConfig};
    /// use ridepool::{Capacities, CompanyId};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/ridepool.db")).unwrap();
    /// let taxi = Database::create_vehicle(db.connection(), CompanyId(1), &Capacities::new(3, 1, 0, 2)).unwrap();
    /// println!("vehicle {}", taxi.id);
    /// ```
    pub fn create_vehicle(
        conn: &Connection,
        company: CompanyId,
        capacities: &Capacities,
    ) -> Result<Vehicle> {
        conn.execute(
            INSERT_VEHICLE,
            params![
                company,
                capacities.passengers,
                capacities.wheelchairs,
                capacities.bikes,
                capacities.luggage
            ],
        )?;
        let id = VehicleId(conn.last_insert_rowid());
        log::info!("created vehicle {id} for company {company}");
        Ok(Vehicle {
            id,
            company,
            capacities: *capacities,
        })
    }

    /// Looks up a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_vehicle(conn: &Connection, id: VehicleId) -> Result<Option<Vehicle>> {
        Ok(conn
            .query_row(SELECT_VEHICLE, [id], row_to_vehicle)
            .optional()?)
    }

    /// Lists vehicles, optionally only those of one company.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn list_vehicles(conn: &Connection, company: Option<CompanyId>) -> Result<Vec<Vehicle>> {
        let mut stmt = conn.prepare(LIST_VEHICLES)?;
        let vehicles = stmt
            .query_map([company], row_to_vehicle)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(vehicles)
    }

    /// Returns `true` if `vehicle` exists and is owned by `company`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn vehicle_belongs_to(
        conn: &Connection,
        vehicle: VehicleId,
        company: CompanyId,
    ) -> Result<bool> {
        Ok(conn.query_row(VEHICLE_BELONGS_TO, params![vehicle, company], |row| {
            row.get(0)
        })?)
    }

    /// Stores one availability row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. for an unknown vehicle.
    pub fn create_availability(
        conn: &Connection,
        availability: &NewAvailability,
    ) -> Result<Availability> {
        conn.execute(
            INSERT_AVAILABILITY,
            params![
                availability.vehicle,
                availability.interval.start_time(),
                availability.interval.end_time()
            ],
        )?;
        Ok(Availability {
            id: AvailabilityId(conn.last_insert_rowid()),
            vehicle: availability.vehicle,
            interval: availability.interval,
        })
    }

    /// Stores several availability rows, returning them with their ids.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub fn insert_availability(
        conn: &Connection,
        rows: &[NewAvailability],
    ) -> Result<Vec<Availability>> {
        rows.iter()
            .map(|row| Self::create_availability(conn, row))
            .collect()
    }

    /// Writes rows by id, inserting any that do not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    pub fn upsert_availability(conn: &Connection, rows: &[Availability]) -> Result<usize> {
        let mut stmt = conn.prepare(UPSERT_AVAILABILITY)?;
        let mut written = 0;
        for row in rows {
            written += stmt.execute(params![
                row.id,
                row.vehicle,
                row.interval.start_time(),
                row.interval.end_time()
            ])?;
        }
        Ok(written)
    }

    /// Deletes rows by id, returning how many existed.
    ///
    /// # Errors
    ///
    /// Returns an error if any delete fails.
    pub fn delete_availability(conn: &Connection, ids: &[AvailabilityId]) -> Result<usize> {
        let mut stmt = conn.prepare(DELETE_AVAILABILITY)?;
        let mut deleted = 0;
        for id in ids {
            deleted += stmt.execute([id])?;
        }
        Ok(deleted)
    }

    /// Lists availability rows ordered by vehicle and start, optionally for
    /// one vehicle only.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn list_availability(
        conn: &Connection,
        vehicle: Option<VehicleId>,
    ) -> Result<Vec<Availability>> {
        let mut stmt = conn.prepare(LIST_AVAILABILITY)?;
        let rows = stmt
            .query_map([vehicle], row_to_availability)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows)
    }

    /// The vehicle's rows sharing more than a boundary with `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn overlapping_availability(
        conn: &Connection,
        vehicle: VehicleId,
        interval: &Interval,
    ) -> Result<Vec<Availability>> {
        let mut stmt = conn.prepare(SELECT_OVERLAPPING_AVAILABILITY)?;
        let rows = stmt
            .query_map(
                params![vehicle, interval.start_time(), interval.end_time()],
                row_to_availability,
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows)
    }

    /// Records a scheduled pickup or dropoff.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, e.g. for an unknown vehicle.
    pub fn create_event(conn: &Connection, event: &NewTourEvent) -> Result<TourEvent> {
        conn.execute(
            INSERT_EVENT,
            params![
                event.vehicle,
                event.scheduled_time,
                event.is_pickup,
                event.capacities.passengers,
                event.capacities.wheelchairs,
                event.capacities.bikes,
                event.capacities.luggage
            ],
        )?;
        Ok(TourEvent {
            id: EventId(conn.last_insert_rowid()),
            vehicle: event.vehicle,
            scheduled_time: event.scheduled_time,
            is_pickup: event.is_pickup,
            capacities: event.capacities,
        })
    }

    /// The vehicle's events in scheduled order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn events_for_vehicle(conn: &Connection, vehicle: VehicleId) -> Result<Vec<TourEvent>> {
        let mut stmt = conn.prepare(SELECT_EVENTS_FOR_VEHICLE)?;
        let events = stmt
            .query_map([vehicle], row_to_event)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(events)
    }
}
