//! Remove-availability command implementation.

use crate::error::CliError;
use crate::utils::{
    interval, load_configuration, now_or, open_database, parse_time, report_warnings,
    GlobalOptions,
};
use clap::Args;
use ridepool::operations::{PlanExecutor, RemoveAvailabilityOptions, RemoveAvailabilityPlan};
use ridepool::{CompanyId, UnixtimeMs, VehicleId};

/// Take a time window away from a vehicle's availability.
///
/// Rows inside the window are deleted, rows around it are split and rows
/// reaching into it are shortened. Time too close to now is left alone.
#[derive(Args)]
pub struct RemoveAvailabilityCommand {
    /// Vehicle losing availability
    #[arg(long, value_name = "ID")]
    pub vehicle: i64,

    /// Company owning the vehicle
    #[arg(long, value_name = "ID")]
    pub company: i64,

    /// Window start (Unix ms or RFC 3339)
    #[arg(long, value_parser = parse_time)]
    pub start: UnixtimeMs,

    /// Window end (Unix ms or RFC 3339)
    #[arg(long, value_parser = parse_time)]
    pub end: UnixtimeMs,

    /// Treat this as the current time
    #[arg(long, value_parser = parse_time)]
    pub now: Option<UnixtimeMs>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl RemoveAvailabilityCommand {
    /// Execute the remove-availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let options = RemoveAvailabilityOptions::new(
            VehicleId(self.vehicle),
            CompanyId(self.company),
            interval(self.start, self.end)?,
            now_or(self.now),
        )
        .with_min_prep_ms(config.min_prep_ms());

        let mut db = open_database(global, &config)?;
        let tx = db.begin_transaction()?;
        let plan = RemoveAvailabilityPlan::new(options).build_plan(&tx)?;

        if self.dry_run {
            let result = PlanExecutor::new(&tx).dry_run().execute(&plan)?;
            report_warnings(global, &result.warnings);
            for action in &result.actions_taken {
                println!("Would: {action}");
            }
            return Ok(());
        }

        let result = PlanExecutor::new(&tx).execute(&plan)?;
        tx.commit().map_err(ridepool::Error::from)?;

        report_warnings(global, &result.warnings);
        if !global.quiet {
            eprintln!("Applied {} change(s)", result.actions_taken.len());
            for action in &result.actions_taken {
                eprintln!("  - {action}");
            }
        }
        Ok(())
    }
}
