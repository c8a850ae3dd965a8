//! park-ledger - parking lot occupancy and billing CLI
//!
//! Parses command-line arguments and dispatches to the command handlers.
//! Errors are presented with a user message and recovery suggestions; in
//! JSON mode they are emitted as a structured error object.

use clap::Parser;
use park_ledger::cli::{
    handlers::{
        handle_check_in, handle_check_out, handle_export, handle_init, handle_reset,
        handle_status, handle_summary,
    },
    Cli, Commands, OutputFormatter,
};
use park_ledger::error::Result;
use std::process;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let lot_dir = cli.lot_dir.as_deref();
    match cli.command {
        Commands::Init { spots, force } => handle_init(spots, force, lot_dir, formatter),
        Commands::CheckIn { plate, spot } => handle_check_in(&plate, spot, lot_dir, formatter),
        Commands::CheckOut { plate } => handle_check_out(&plate, lot_dir, formatter),
        Commands::Status { free } => handle_status(free, lot_dir, formatter),
        Commands::Summary => handle_summary(lot_dir, formatter),
        Commands::Reset { yes } => handle_reset(yes, lot_dir, formatter),
        Commands::Export { output } => handle_export(output.as_deref(), lot_dir, formatter),
    }
}

/// Handle errors and display them to the user
fn handle_error(error: &park_ledger::error::ParkingError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
