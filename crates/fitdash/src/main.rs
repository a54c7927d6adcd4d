//! fitdash - terminal tables for the team fitness API
//!
//! A one-shot CLI: each subcommand fetches one resource collection from the
//! configured server, prints it as an aligned table (or JSON), and exits.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    fitdash_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
