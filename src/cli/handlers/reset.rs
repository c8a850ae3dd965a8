//! Handler for the `reset` command
//!
//! Hard reset: every ticket is discarded and every spot freed. The command
//! refuses to run without `--yes` since there is no undo.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::error::Result;

pub fn handle_reset(yes: bool, lot_dir: Option<&str>, output: &OutputFormatter) -> Result<()> {
    if !yes {
        output.warn("Reset discards all tickets and frees every spot. Re-run with --yes to confirm.");
        return Ok(());
    }

    let context = HandlerContext::new(lot_dir)?;
    context.engine.reset_all()?;

    if output.is_json() {
        output.print_json(&serde_json::json!({ "status": "ok" }))?;
    } else {
        output.success("Lot reset: all tickets discarded, all spots freed");
    }

    Ok(())
}
