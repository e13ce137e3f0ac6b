//! Main entry point for the ridepool CLI.

use clap::Parser;
use ridepool_cli::Cli;

fn main() {
    let cli = Cli::parse();

    let _logger = ridepool::init_logger(cli.verbose, cli.quiet);

    let global = cli.global_options();
    match cli.command.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
