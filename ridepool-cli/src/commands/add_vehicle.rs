//! Add-vehicle command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, CapacityArgs, GlobalOptions};
use clap::Args;
use ridepool::{CompanyId, Database};

/// Register a vehicle and print its id.
#[derive(Args)]
pub struct AddVehicleCommand {
    /// Owning company
    #[arg(long, value_name = "ID")]
    pub company: i64,

    #[command(flatten)]
    pub capacities: CapacityArgs,
}

impl AddVehicleCommand {
    /// Execute the add-vehicle command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let vehicle = Database::create_vehicle(
            db.connection(),
            CompanyId(self.company),
            &self.capacities.into(),
        )?;

        if !global.quiet {
            eprintln!(
                "Added vehicle {} for company {} ({})",
                vehicle.id, vehicle.company, vehicle.capacities
            );
        }
        println!("{}", vehicle.id);
        Ok(())
    }
}
