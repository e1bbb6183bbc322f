//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Millwright: structural validation for table configurations
#[derive(Parser)]
#[command(name = "millwright")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a complete specification and show every finding
    Validate {
        /// Path to the specification (JSON)
        #[arg(value_name = "SPEC")]
        file: PathBuf,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Derive per-field bounds for a partial specification
    Constraints {
        /// Path to the partial specification (JSON)
        #[arg(value_name = "SPEC")]
        file: PathBuf,

        /// Output the constraints as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a slab price from a price list
    Price {
        /// Path to the price list (CSV)
        #[arg(value_name = "PRICES")]
        file: PathBuf,

        /// Material name (e.g. "quartz", "sintered_stone")
        #[arg(short, long)]
        material: String,

        /// Slab thickness in millimeters
        #[arg(short, long)]
        thickness: f64,
    },
}
