//! Add-event command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_time, CapacityArgs, GlobalOptions};
use clap::{Args, ValueEnum};
use ridepool::{Database, NewTourEvent, UnixtimeMs, VehicleId};

/// Whether the stop picks up or drops off.
#[derive(Clone, Copy, ValueEnum)]
pub enum EventKind {
    /// Load is added
    Pickup,
    /// Load is removed
    Dropoff,
}

/// Record a scheduled stop on a vehicle's tour and print its id.
#[derive(Args)]
pub struct AddEventCommand {
    /// Vehicle serving the stop
    #[arg(long, value_name = "ID")]
    pub vehicle: i64,

    /// Scheduled time (Unix ms or RFC 3339)
    #[arg(long, value_parser = parse_time)]
    pub time: UnixtimeMs,

    /// Pickup or dropoff
    #[arg(long, value_enum)]
    pub kind: EventKind,

    #[command(flatten)]
    pub capacities: CapacityArgs,
}

impl AddEventCommand {
    /// Execute the add-event command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let vehicle = VehicleId(self.vehicle);
        if Database::get_vehicle(db.connection(), vehicle)?.is_none() {
            return Err(ridepool::Error::NotFound {
                resource: format!("vehicle {vehicle}"),
            }
            .into());
        }

        let event = Database::create_event(
            db.connection(),
            &NewTourEvent {
                vehicle,
                scheduled_time: self.time,
                is_pickup: matches!(self.kind, EventKind::Pickup),
                capacities: self.capacities.into(),
            },
        )?;
        println!("{}", event.id);
        Ok(())
    }
}
