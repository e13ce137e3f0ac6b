//! Free-windows command implementation.

use std::fs;
use std::path::PathBuf;

use crate::commands::list_availability::{print_windows, VehicleWindow};
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions, OutputFormat};
use clap::Args;
use ridepool::{free_windows, BookedSpan, Database, VehicleId};

/// Show when vehicles are available and not booked.
///
/// Booked spans come from a JSON file holding an array of
/// `{"vehicle": 1, "start_time": ..., "end_time": ...}` objects.
#[derive(Args)]
pub struct FreeWindowsCommand {
    /// Only this vehicle
    #[arg(long, value_name = "ID")]
    pub vehicle: Option<i64>,

    /// JSON file of booked spans (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub booked: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl FreeWindowsCommand {
    /// Execute the free-windows command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let booked: Vec<BookedSpan> = match self.booked {
            None => Vec::new(),
            Some(ref path) if path.as_os_str() == "-" => serde_json::from_reader(std::io::stdin())?,
            Some(ref path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        };

        let rows = Database::list_availability(db.connection(), self.vehicle.map(VehicleId))?;
        let windows: Vec<VehicleWindow> = free_windows(&rows, &booked)
            .into_iter()
            .flat_map(|(vehicle, intervals)| {
                intervals
                    .into_iter()
                    .map(move |interval| VehicleWindow { vehicle, interval })
            })
            .collect();

        print_windows(OutputFormat::resolve(self.format, &config), &windows)
    }
}
