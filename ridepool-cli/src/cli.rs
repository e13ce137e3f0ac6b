//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddAvailabilityCommand, AddEventCommand, AddVehicleCommand, CompletionsCommand,
    FreeWindowsCommand, InitCommand, InsertionsCommand, ListAvailabilityCommand,
    ListVehiclesCommand, RemoveAvailabilityCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vehicle availability and ride pooling insertion queries.
#[derive(Parser)]
#[command(name = "ridepool")]
#[command(version, about = "Manage vehicle availability and find where rides fit", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "RIDEPOOL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "RIDEPOOL_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "RIDEPOOL_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The global options as passed to every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            busy_timeout: self.busy_timeout,
            disable_autoinit: self.disable_autoinit,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Register a vehicle
    AddVehicle(AddVehicleCommand),

    /// List registered vehicles
    ListVehicles(ListVehiclesCommand),

    /// Make a vehicle available for a time window
    AddAvailability(AddAvailabilityCommand),

    /// Take a time window away from a vehicle's availability
    RemoveAvailability(RemoveAvailabilityCommand),

    /// List stored availability
    ListAvailability(ListAvailabilityCommand),

    /// Show availability minus booked spans
    FreeWindows(FreeWindowsCommand),

    /// Record a scheduled pickup or dropoff
    AddEvent(AddEventCommand),

    /// Show where a request fits into a tour
    Insertions(InsertionsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Command {
    /// Run the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), crate::error::CliError> {
        match self {
            Command::Init(cmd) => cmd.execute(global),
            Command::AddVehicle(cmd) => cmd.execute(global),
            Command::ListVehicles(cmd) => cmd.execute(global),
            Command::AddAvailability(cmd) => cmd.execute(global),
            Command::RemoveAvailability(cmd) => cmd.execute(global),
            Command::ListAvailability(cmd) => cmd.execute(global),
            Command::FreeWindows(cmd) => cmd.execute(global),
            Command::AddEvent(cmd) => cmd.execute(global),
            Command::Insertions(cmd) => cmd.execute(global),
            Command::Completions(cmd) => cmd.execute(global),
        }
    }
}
