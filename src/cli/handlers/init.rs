//! Handler for the `init` command
//!
//! Creates the lot directory with its config and fixed spot set. Safe to
//! repeat: an existing lot is left untouched unless `--force` is given.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::config::Config;
use crate::error::Result;
use crate::storage::{LOT_DIR_NAME, STATE_FILE_NAME};
use std::path::PathBuf;

pub fn handle_init(
    spots: Option<u32>,
    force: bool,
    lot_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let root = match lot_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    let lot_path = root.join(LOT_DIR_NAME);
    let state_path = lot_path.join(STATE_FILE_NAME);

    if state_path.exists() && !force {
        // Spot creation is idempotent; without --force an existing lot is
        // left exactly as it is.
        output.info(&format!(
            "Lot already initialized at {} (use --force to re-create)",
            lot_path.display()
        ));
        return Ok(());
    }
    if state_path.exists() && force {
        std::fs::remove_file(&state_path)?;
    }

    let mut config = Config::load_or_default(&lot_path)?;
    if let Some(count) = spots {
        config.lot.spot_count = count;
    }
    config.save(&lot_path)?;

    let context = HandlerContext::at_lot_dir(lot_path.clone())?;
    context.engine.initialize(config.lot.spot_count)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "ok",
            "lot_dir": lot_path,
            "spots": config.lot.spot_count,
        }))?;
    } else {
        output.success(&format!(
            "Initialized lot with {} spots at {}",
            config.lot.spot_count,
            lot_path.display()
        ));
    }

    Ok(())
}
