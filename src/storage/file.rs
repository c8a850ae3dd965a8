use super::memory;
use super::repository::{FinancialSummary, SpotRepository, TicketRepository};
use super::STATE_FILE_NAME;
use crate::core::{Spot, SpotId, SpotStatus, Ticket, TicketId};
use crate::error::{ParkingError, Result};
use crate::storage::LotState;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store persisting the lot state as YAML
///
/// Every operation acquires the state file, applies the change, and writes
/// it back before returning; no connection or handle outlives a call. Writes
/// go through a temporary file renamed into place so a crash never leaves a
/// half-written state file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a storage handle rooted at the lot directory
    ///
    /// The directory itself is created by `initialize`; constructing the
    /// handle performs no I/O.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILE_NAME)
    }

    /// Loads the lot state, failing when the lot was never initialized
    pub fn load_state(&self) -> Result<LotState> {
        let path = self.state_path();
        if !path.exists() {
            return Err(ParkingError::LotNotInitialized {
                path: self.root.display().to_string(),
            });
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Writes the lot state atomically
    pub fn save_state(&self, state: &LotState) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let contents = serde_yaml::to_string(state)?;
        let tmp = self.state_path().with_extension("yaml.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, self.state_path())?;
        Ok(())
    }

    fn with_state<T>(&self, f: impl FnOnce(&LotState) -> Result<T>) -> Result<T> {
        let state = self.load_state()?;
        f(&state)
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut LotState) -> Result<T>) -> Result<T> {
        let mut state = self.load_state()?;
        let value = f(&mut state)?;
        self.save_state(&state)?;
        Ok(value)
    }
}

impl SpotRepository for FileStorage {
    fn initialize(&mut self, count: u32) -> Result<()> {
        // The state file may not exist yet; start from an empty lot.
        let mut state = match self.load_state() {
            Ok(state) => state,
            Err(ParkingError::LotNotInitialized { .. }) => LotState::default(),
            Err(e) => return Err(e),
        };
        memory::initialize_state(&mut state, count);
        self.save_state(&state)
    }

    fn list_spots(&self) -> Result<Vec<Spot>> {
        self.with_state(|state| Ok(state.spots.clone()))
    }

    fn spot(&self, id: SpotId) -> Result<Spot> {
        self.with_state(|state| memory::spot_in_state(state, id))
    }

    fn find_first_free(&self) -> Result<Option<SpotId>> {
        self.with_state(|state| Ok(memory::first_free_in_state(state)))
    }

    fn set_status(&mut self, id: SpotId, status: SpotStatus) -> Result<()> {
        self.update_state(|state| memory::set_status_in_state(state, id, status))
    }
}

impl TicketRepository for FileStorage {
    fn open_ticket(
        &mut self,
        plate: &str,
        spot_id: SpotId,
        entry_time: DateTime<Utc>,
    ) -> Result<TicketId> {
        self.update_state(|state| memory::open_ticket_in_state(state, plate, spot_id, entry_time))
    }

    fn find_active_by_plate(&self, plate: &str) -> Result<Option<Ticket>> {
        self.with_state(|state| Ok(memory::active_by_plate_in_state(state, plate)))
    }

    fn close_ticket(&mut self, id: TicketId, exit_time: DateTime<Utc>, amount: i64) -> Result<()> {
        self.update_state(|state| memory::close_ticket_in_state(state, id, exit_time, amount))
    }

    fn clear_all(&mut self) -> Result<()> {
        self.update_state(|state| {
            state.tickets.clear();
            Ok(())
        })
    }

    fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.with_state(|state| Ok(state.tickets.clone()))
    }

    fn summary(&self) -> Result<FinancialSummary> {
        self.with_state(|state| Ok(memory::summary_of_state(state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join(".park-ledger"));
        (temp_dir, storage)
    }

    #[test]
    fn test_uninitialized_lot_is_reported() {
        let (_guard, storage) = storage();
        let result = storage.list_spots();
        assert!(matches!(result, Err(ParkingError::LotNotInitialized { .. })));
    }

    #[test]
    fn test_state_round_trips_through_yaml() {
        let (_guard, mut storage) = storage();
        storage.initialize(5).unwrap();
        let id = storage
            .open_ticket("ABC123", SpotId(2), Utc::now())
            .unwrap();
        storage.set_status(SpotId(2), SpotStatus::Occupied).unwrap();

        // A fresh handle must observe the same state from disk.
        let reopened = FileStorage::new(storage.root());
        let spots = reopened.list_spots().unwrap();
        assert_eq!(spots.len(), 5);
        assert_eq!(spots[1].status, SpotStatus::Occupied);
        let active = reopened.find_active_by_plate("ABC123").unwrap();
        assert_eq!(active.map(|t| t.id), Some(id));
    }

    #[test]
    fn test_initialize_is_idempotent_on_disk() {
        let (_guard, mut storage) = storage();
        storage.initialize(5).unwrap();
        storage.set_status(SpotId(1), SpotStatus::Occupied).unwrap();
        storage.initialize(5).unwrap();

        let spots = storage.list_spots().unwrap();
        assert_eq!(spots.len(), 5);
        // re-initialization must not wipe existing occupancy
        assert_eq!(spots[0].status, SpotStatus::Occupied);
    }

    #[test]
    fn test_failed_operation_leaves_state_untouched() {
        let (_guard, mut storage) = storage();
        storage.initialize(2).unwrap();
        storage
            .open_ticket("ABC123", SpotId(1), Utc::now())
            .unwrap();
        let before = storage.load_state().unwrap();

        let result = storage.open_ticket("ABC123", SpotId(2), Utc::now());
        assert!(matches!(
            result,
            Err(ParkingError::DuplicateActiveTicket { .. })
        ));
        assert_eq!(storage.load_state().unwrap(), before);
    }
}
