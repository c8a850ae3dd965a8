//! Handler for the `check-in` command

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::SpotId;
use crate::error::Result;

pub fn handle_check_in(
    plate: &str,
    spot: Option<u32>,
    lot_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(lot_dir)?;

    let receipt = match spot {
        Some(id) => context.engine.check_in_manual(plate, SpotId(id))?,
        None => context.engine.check_in(plate)?,
    };

    if output.is_json() {
        output.print_json(&receipt)?;
    } else {
        output.success(&format!(
            "Vehicle {} parked at spot {} (ticket {})",
            receipt.plate, receipt.spot_code, receipt.ticket_id
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::handle_init;
    use crate::core::SpotStatus;
    use crate::error::ParkingError;
    use tempfile::TempDir;

    fn quiet() -> OutputFormatter {
        OutputFormatter::new(false, true)
    }

    fn lot(spots: u32) -> (TempDir, String) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap().to_string();
        handle_init(Some(spots), false, Some(&root), &quiet()).unwrap();
        (temp_dir, root)
    }

    #[test]
    fn test_auto_check_in() {
        let (_guard, root) = lot(3);
        handle_check_in("abc123", None, Some(&root), &quiet()).unwrap();

        let context = HandlerContext::new(Some(&root)).unwrap();
        let spots = context.engine.list_spots().unwrap();
        assert_eq!(spots[0].status, SpotStatus::Occupied);
    }

    #[test]
    fn test_manual_check_in_to_occupied_spot_fails() {
        let (_guard, root) = lot(3);
        handle_check_in("abc123", Some(2), Some(&root), &quiet()).unwrap();
        let result = handle_check_in("def456", Some(2), Some(&root), &quiet());
        assert!(matches!(result, Err(ParkingError::SpotOccupied { .. })));
    }

    #[test]
    fn test_check_in_without_lot_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap();
        let result = handle_check_in("abc123", None, Some(root), &quiet());
        assert!(matches!(result, Err(ParkingError::LotNotInitialized { .. })));
    }
}
