//! Handler for the `check-out` command

use super::common::HandlerContext;
use crate::cli::utils::format_duration;
use crate::cli::OutputFormatter;
use crate::core::format_cents;
use crate::error::Result;

pub fn handle_check_out(plate: &str, lot_dir: Option<&str>, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(lot_dir)?;
    let receipt = context.engine.check_out(plate)?;

    if output.is_json() {
        output.print_json(&receipt)?;
    } else {
        output.success(&format!(
            "Vehicle {} checked out of spot {}",
            receipt.plate, receipt.spot_id
        ));
        output.info(&format!("  Time parked: {}", format_duration(receipt.duration())));
        output.info(&format!("  Amount due: {}", format_cents(receipt.amount)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::{handle_check_in, handle_init};
    use crate::error::ParkingError;
    use tempfile::TempDir;

    fn quiet() -> OutputFormatter {
        OutputFormatter::new(false, true)
    }

    #[test]
    fn test_check_out_settles_ticket() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap();
        handle_init(Some(3), false, Some(root), &quiet()).unwrap();
        handle_check_in("abc123", None, Some(root), &quiet()).unwrap();

        handle_check_out("abc123", Some(root), &quiet()).unwrap();

        let context = HandlerContext::new(Some(root)).unwrap();
        let summary = context.engine.financial_summary().unwrap();
        assert_eq!(summary.closed_count, 1);
        // sub-hour stay bills the first-hour rate
        assert_eq!(summary.total_cents, 1000);
        assert!(context.engine.list_spots().unwrap()[0].is_free());
    }

    #[test]
    fn test_check_out_unknown_plate_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap();
        handle_init(Some(3), false, Some(root), &quiet()).unwrap();

        let result = handle_check_out("GHOST1", Some(root), &quiet());
        assert!(matches!(result, Err(ParkingError::NoActiveTicket { .. })));
    }
}
