//! List-availability command implementation.

use crate::error::CliError;
use crate::utils::{
    format_time, load_configuration, open_database, print_records, GlobalOptions, OutputFormat,
};
use clap::Args;
use ridepool::{merge_per_vehicle, Availability, Database, Interval, VehicleId};
use serde::Serialize;

/// Column headers for stored rows.
const ROW_HEADERS: [&str; 4] = ["id", "vehicle", "start", "end"];

/// Column headers for merged windows.
const WINDOW_HEADERS: [&str; 3] = ["vehicle", "start", "end"];

/// A vehicle's window, flattened for output.
#[derive(Serialize)]
pub struct VehicleWindow {
    /// The vehicle.
    pub vehicle: VehicleId,
    /// The window.
    #[serde(flatten)]
    pub interval: Interval,
}

/// Print rows of `(vehicle, interval)` pairs.
pub fn print_windows(format: OutputFormat, windows: &[VehicleWindow]) -> Result<(), CliError> {
    print_records(format, &WINDOW_HEADERS, windows, |w| {
        vec![
            w.vehicle.to_string(),
            format_time(w.interval.start_time()),
            format_time(w.interval.end_time()),
        ]
    })
}

/// List stored availability.
#[derive(Args)]
pub struct ListAvailabilityCommand {
    /// Only this vehicle
    #[arg(long, value_name = "ID")]
    pub vehicle: Option<i64>,

    /// Merge each vehicle's rows into continuous windows
    #[arg(long)]
    pub merged: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListAvailabilityCommand {
    /// Execute the list-availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let format = OutputFormat::resolve(self.format, &config);

        let rows = Database::list_availability(db.connection(), self.vehicle.map(VehicleId))?;

        if self.merged {
            let windows: Vec<VehicleWindow> = merge_per_vehicle(&rows)
                .into_iter()
                .flat_map(|(vehicle, intervals)| {
                    intervals
                        .into_iter()
                        .map(move |interval| VehicleWindow { vehicle, interval })
                })
                .collect();
            return print_windows(format, &windows);
        }

        print_records(format, &ROW_HEADERS, &rows, |row: &Availability| {
            vec![
                row.id.to_string(),
                row.vehicle.to_string(),
                format_time(row.interval.start_time()),
                format_time(row.interval.end_time()),
            ]
        })
    }
}
