//! Handler for the `summary` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::format_cents;
use crate::error::Result;

pub fn handle_summary(lot_dir: Option<&str>, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(lot_dir)?;
    let summary = context.engine.financial_summary()?;

    if output.is_json() {
        output.print_json(&summary)?;
    } else {
        output.info(&format!("Vehicles settled: {}", summary.closed_count));
        output.info(&format!("Total collected: {}", format_cents(summary.total_cents)));
    }

    Ok(())
}
