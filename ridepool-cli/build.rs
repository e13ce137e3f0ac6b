//! Build script for ridepool-cli.
//!
//! Generates the man page with clap_mangen. Build scripts cannot depend on
//! the crate being built, so the command outline is repeated here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("ridepool")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage vehicle availability and find where rides fit")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("RIDEPOOL_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("RIDEPOOL_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("RIDEPOOL_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init").about("Initialize the data directory and database"),
            Command::new("add-vehicle").about("Register a vehicle"),
            Command::new("list-vehicles").about("List registered vehicles"),
            Command::new("add-availability").about("Make a vehicle available for a time window"),
            Command::new("remove-availability")
                .about("Take a time window away from a vehicle's availability"),
            Command::new("list-availability").about("List stored availability"),
            Command::new("free-windows").about("Show availability minus booked spans"),
            Command::new("add-event").about("Record a scheduled pickup or dropoff"),
            Command::new("insertions").about("Show where a request fits into a tour"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer).unwrap();
    fs::write(man_dir.join("ridepool.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
