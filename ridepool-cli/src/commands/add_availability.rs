//! Add-availability command implementation.

use crate::error::CliError;
use crate::utils::{
    interval, load_configuration, now_or, open_database, parse_time, report_warnings,
    GlobalOptions,
};
use clap::Args;
use ridepool::operations::{AddAvailabilityOptions, AddAvailabilityPlan, PlanExecutor};
use ridepool::{CompanyId, UnixtimeMs, VehicleId};

/// Make a vehicle available for a time window.
///
/// The window is clipped to the configured daily shift hours and to the
/// time that may still change; time the vehicle already has is skipped.
#[derive(Args)]
pub struct AddAvailabilityCommand {
    /// Vehicle to make available
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

impl AddAvailabilityCommand {
    /// Execute the add-availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let (shift_start, shift_end) = config.shift_bounds_ms();
        let options = AddAvailabilityOptions::new(
            VehicleId(self.vehicle),
            CompanyId(self.company),
            interval(self.start, self.end)?,
            now_or(self.now),
        )
        .with_min_prep_ms(config.min_prep_ms())
        .with_shift_ms(shift_start, shift_end);

        let mut db = open_database(global, &config)?;
        let tx = db.begin_transaction()?;
        let plan = AddAvailabilityPlan::new(options).build_plan(&tx)?;

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
            eprintln!("Added {} availability row(s)", result.inserted.len());
        }
        for row in &result.inserted {
            println!("{}\t{}", row.id, row.interval);
        }
        Ok(())
    }
}
