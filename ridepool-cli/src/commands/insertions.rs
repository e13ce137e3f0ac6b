//! Insertions command implementation.
//!
//! Reports where a request could join a tour, either a stored vehicle's or
//! one described in a JSON file.

use std::fs;
use std::path::PathBuf;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, CapacityArgs, GlobalOptions};
use clap::Args;
use ridepool::{Capacities, Event, InsertionQuery, InsertionScan, VehicleId};
use serde::Deserialize;

/// A tour given on the command line instead of from the database.
#[derive(Deserialize)]
struct TourFile {
    vehicle: Capacities,
    #[serde(default)]
    events: Vec<Event>,
}

/// Show the windows where a request fits into a tour.
#[derive(Args)]
pub struct InsertionsCommand {
    /// Scan this stored vehicle's tour
    #[arg(long, value_name = "ID", conflicts_with = "tour", required_unless_present = "tour")]
    pub vehicle: Option<i64>,

    /// Scan a tour from a JSON file: `{"vehicle": {...}, "events": [...]}`
    #[arg(long, value_name = "FILE")]
    pub tour: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 if the request fits nowhere
    #[arg(long)]
    pub assert_feasible: bool,

    #[command(flatten)]
    pub required: CapacityArgs,
}

impl InsertionsCommand {
    /// Execute the insertions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let required: Capacities = self.required.into();

        let scan = match (self.vehicle, self.tour) {
            (Some(id), _) => {
                let config = load_configuration(global)?;
                let db = open_database(global, &config)?;
                InsertionQuery::new(VehicleId(id), required)
                    .run(db.connection())?
                    .scan
            }
            (None, Some(path)) => {
                let tour: TourFile = serde_json::from_str(&fs::read_to_string(path)?)?;
                InsertionScan::run(&tour.vehicle, &required, &tour.events)
            }
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "either --vehicle or --tour is required".to_string(),
                ))
            }
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&scan).map_err(std::io::Error::other)?
            );
        } else {
            match scan {
                InsertionScan::Nowhere => println!("nowhere"),
                InsertionScan::Anywhere => println!("anywhere"),
                InsertionScan::Within(ref ranges) => {
                    for range in ranges {
                        println!("{}\t{}", range.earliest_pickup, range.latest_dropoff);
                    }
                }
            }
        }

        if self.assert_feasible && !scan.is_feasible() {
            return Err(CliError::SemanticFailure(
                "request does not fit into the tour".to_string(),
            ));
        }
        Ok(())
    }
}
