//! CLI helpers shared across handlers

use crate::error::{ParkingError, Result};
use crate::storage::LOT_DIR_NAME;
use std::path::PathBuf;

/// Finds the lot root: the directory containing `.park-ledger`
///
/// Starts at `start_dir` (or the current directory) and walks up toward the
/// filesystem root. Fails with `LotNotInitialized` when no lot directory is
/// found on the way.
pub fn find_lot_root(start_dir: Option<&str>) -> Result<PathBuf> {
    let start = match start_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    let mut current = start.clone();
    loop {
        if current.join(LOT_DIR_NAME).is_dir() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(ParkingError::LotNotInitialized {
                path: start.display().to_string(),
            });
        }
    }
}

/// Formats a chrono duration as `"{h}h {mm}m"`
pub fn format_duration(duration: chrono::Duration) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    format!("{hours}h {minutes:02}m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_find_lot_root_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir(root.join(LOT_DIR_NAME)).unwrap();
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_lot_root(Some(nested.to_str().unwrap())).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_find_lot_root_fails_without_lot() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_lot_root(Some(temp_dir.path().to_str().unwrap()));
        assert!(matches!(result, Err(ParkingError::LotNotInitialized { .. })));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(65)), "1h 05m");
        assert_eq!(format_duration(Duration::seconds(59)), "0h 00m");
        assert_eq!(format_duration(Duration::hours(26)), "26h 00m");
    }
}
