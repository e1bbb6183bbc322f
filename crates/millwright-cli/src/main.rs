//! Millwright CLI - validate table specifications from the command line.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file, json } => commands::validate::run(file, json, cli.verbose),

        Commands::Constraints { file, json } => {
            commands::constraints::run(file, json, cli.verbose)
        }

        Commands::Price {
            file,
            material,
            thickness,
        } => commands::price::run(file, material, thickness),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
