//! Library exports for ridepool-cli.
//!
//! The binary is a thin wrapper over these modules; integration tests and
//! completion generation reach the CLI structure through here.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
