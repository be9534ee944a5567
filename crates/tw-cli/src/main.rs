//! Terminal front end for the Thornwall adventure engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tw",
    about = "Thornwall — a narrative adventure engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the bundled adventure interactively
    Play,

    /// Validate the bundled world and scenario
    Check,

    /// Display the location graph
    Map,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play => commands::play::run(),
        Commands::Check => commands::check::run(),
        Commands::Map => commands::map::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
