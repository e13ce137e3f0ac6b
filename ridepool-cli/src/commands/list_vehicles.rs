//! List-vehicles command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_records, GlobalOptions, OutputFormat};
use clap::Args;
use ridepool::{CompanyId, Database, Vehicle};

/// Column headers for delimited output.
const COLUMN_HEADERS: [&str; 6] = [
    "id",
    "company",
    "passengers",
    "wheelchairs",
    "bikes",
    "luggage",
];

/// List registered vehicles.
#[derive(Args)]
pub struct ListVehiclesCommand {
    /// Only vehicles of this company
    #[arg(long, value_name = "ID")]
    pub company: Option<i64>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListVehiclesCommand {
    /// Execute the list-vehicles command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let vehicles = Database::list_vehicles(db.connection(), self.company.map(CompanyId))?;

        print_records(
            OutputFormat::resolve(self.format, &config),
            &COLUMN_HEADERS,
            &vehicles,
            |v: &Vehicle| {
                vec![
                    v.id.to_string(),
                    v.company.to_string(),
                    v.capacities.passengers.to_string(),
                    v.capacities.wheelchairs.to_string(),
                    v.capacities.bikes.to_string(),
                    v.capacities.luggage.to_string(),
                ]
            },
        )
    }
}
