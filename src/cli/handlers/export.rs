//! Handler for the `export` command
//!
//! Writes all tickets (open and closed) as CSV: plate, spot code, entry,
//! exit, amount. Open tickets leave exit and amount blank.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::{format_cents, Spot, Ticket};
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::io::Write;

pub fn handle_export(
    output_path: Option<&str>,
    lot_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(lot_dir)?;
    let tickets = context.engine.list_tickets()?;
    let spots = context.engine.list_spots()?;

    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_csv(file, &tickets, &spots)?;
            output.success(&format!("Exported {} tickets to {path}", tickets.len()));
        },
        None => {
            write_csv(std::io::stdout().lock(), &tickets, &spots)?;
        },
    }

    Ok(())
}

fn write_csv<W: Write>(writer: W, tickets: &[Ticket], spots: &[Spot]) -> Result<()> {
    let codes: HashMap<_, _> = spots.iter().map(|s| (s.id, s.code.as_str())).collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Plate", "Spot", "Entry", "Exit", "Amount"])?;
    for ticket in tickets {
        let entry = format_time(Some(ticket.entry_time));
        let exit = format_time(ticket.exit_time);
        let amount = ticket.amount.map(format_cents).unwrap_or_default();
        csv.write_record([
            ticket.plate.as_str(),
            codes.get(&ticket.spot_id).copied().unwrap_or(""),
            entry.as_str(),
            exit.as_str(),
            amount.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
