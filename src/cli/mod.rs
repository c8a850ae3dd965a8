//! Command-line interface for park-ledger
//!
//! Argument parsing with clap, an output formatter shared by every handler,
//! and one handler module per command.

pub mod handlers;
mod output;
mod utils;

pub use output::OutputFormatter;
pub use utils::find_lot_root;

use clap::{Parser, Subcommand};

/// park-ledger - parking lot occupancy and billing
#[derive(Debug, Parser)]
#[command(name = "park-ledger", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Lot directory (defaults to searching upward from the current directory)
    #[arg(long, global = true)]
    pub lot_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the lot: fixed spot set plus config
    Init {
        /// Number of spots (default 30, or the configured value)
        #[arg(long)]
        spots: Option<u32>,

        /// Discard any existing lot state and re-create the lot
        #[arg(long)]
        force: bool,
    },

    /// Register a vehicle entry
    CheckIn {
        /// Vehicle plate
        plate: String,

        /// Check in to a specific spot instead of auto-allocating
        #[arg(long)]
        spot: Option<u32>,
    },

    /// Register a vehicle exit and compute the fee
    CheckOut {
        /// Vehicle plate
        plate: String,
    },

    /// Show per-spot occupancy
    Status {
        /// Only show free spots
        #[arg(long)]
        free: bool,
    },

    /// Show count and total amount of settled tickets
    Summary,

    /// Discard all tickets and free every spot
    Reset {
        /// Skip the confirmation requirement
        #[arg(short, long)]
        yes: bool,
    },

    /// Export all tickets as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}
