use super::repository::{FinancialSummary, SpotRepository, TicketRepository};
use crate::core::{Spot, SpotId, SpotStatus, Ticket, TicketId};
use crate::error::{ParkingError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serializable snapshot of the whole lot
///
/// Spots are kept ordered by ascending id; the allocation scan and the
/// spot listing rely on that ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotState {
    pub spots: Vec<Spot>,
    pub tickets: Vec<Ticket>,
    /// Next ticket id to assign; sequential, starting at 1
    pub next_ticket_id: u64,
}

impl LotState {
    /// Number of open tickets; must always equal the number of occupied spots
    pub fn open_ticket_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_open()).count()
    }
}

/// In-memory store, used directly in tests and embeddings and as the
/// working representation inside [`super::FileStorage`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: LotState,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: LotState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &LotState {
        &self.state
    }

    pub fn into_state(self) -> LotState {
        self.state
    }
}

impl SpotRepository for MemoryStore {
    fn initialize(&mut self, count: u32) -> Result<()> {
        initialize_state(&mut self.state, count);
        Ok(())
    }

    fn list_spots(&self) -> Result<Vec<Spot>> {
        Ok(self.state.spots.clone())
    }

    fn spot(&self, id: SpotId) -> Result<Spot> {
        spot_in_state(&self.state, id)
    }

    fn find_first_free(&self) -> Result<Option<SpotId>> {
        Ok(first_free_in_state(&self.state))
    }

    fn set_status(&mut self, id: SpotId, status: SpotStatus) -> Result<()> {
        set_status_in_state(&mut self.state, id, status)
    }
}

impl TicketRepository for MemoryStore {
    fn open_ticket(
        &mut self,
        plate: &str,
        spot_id: SpotId,
        entry_time: DateTime<Utc>,
    ) -> Result<TicketId> {
        open_ticket_in_state(&mut self.state, plate, spot_id, entry_time)
    }

    fn find_active_by_plate(&self, plate: &str) -> Result<Option<Ticket>> {
        Ok(active_by_plate_in_state(&self.state, plate))
    }

    fn close_ticket(&mut self, id: TicketId, exit_time: DateTime<Utc>, amount: i64) -> Result<()> {
        close_ticket_in_state(&mut self.state, id, exit_time, amount)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.state.tickets.clear();
        Ok(())
    }

    fn list_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.state.tickets.clone())
    }

    fn summary(&self) -> Result<FinancialSummary> {
        Ok(summary_of_state(&self.state))
    }
}

// State-level operations, shared with FileStorage so both implementations
// enforce identical semantics.

pub(super) fn initialize_state(state: &mut LotState, count: u32) {
    if !state.spots.is_empty() {
        return;
    }
    state.spots = (1..=count).map(|n| Spot::new(SpotId(n))).collect();
    state.next_ticket_id = 1;
}

pub(super) fn spot_in_state(state: &LotState, id: SpotId) -> Result<Spot> {
    state
        .spots
        .iter()
        .find(|s| s.id == id)
        .cloned()
        .ok_or(ParkingError::UnknownSpot { id })
}

pub(super) fn first_free_in_state(state: &LotState) -> Option<SpotId> {
    state.spots.iter().find(|s| s.is_free()).map(|s| s.id)
}

pub(super) fn set_status_in_state(
    state: &mut LotState,
    id: SpotId,
    status: SpotStatus,
) -> Result<()> {
    let spot = state
        .spots
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(ParkingError::UnknownSpot { id })?;
    spot.status = status;
    Ok(())
}

pub(super) fn open_ticket_in_state(
    state: &mut LotState,
    plate: &str,
    spot_id: SpotId,
    entry_time: DateTime<Utc>,
) -> Result<TicketId> {
    if active_by_plate_in_state(state, plate).is_some() {
        return Err(ParkingError::DuplicateActiveTicket {
            plate: plate.to_string(),
        });
    }
    let id = TicketId(state.next_ticket_id.max(1));
    state.next_ticket_id = id.0 + 1;
    state.tickets.push(Ticket::new(id, plate, spot_id, entry_time));
    Ok(id)
}

pub(super) fn active_by_plate_in_state(state: &LotState, plate: &str) -> Option<Ticket> {
    state
        .tickets
        .iter()
        .find(|t| t.is_open() && t.plate == plate)
        .cloned()
}

pub(super) fn close_ticket_in_state(
    state: &mut LotState,
    id: TicketId,
    exit_time: DateTime<Utc>,
    amount: i64,
) -> Result<()> {
    let ticket = state
        .tickets
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(ParkingError::UnknownTicket { id })?;
    if !ticket.is_open() {
        return Err(ParkingError::AlreadyClosed { id });
    }
    ticket.exit_time = Some(exit_time);
    ticket.amount = Some(amount);
    Ok(())
}

pub(super) fn summary_of_state(state: &LotState) -> FinancialSummary {
    let closed = state.tickets.iter().filter(|t| !t.is_open());
    let mut summary = FinancialSummary::default();
    for ticket in closed {
        summary.closed_count += 1;
        summary.total_cents += ticket.amount.unwrap_or(0);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized(count: u32) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.initialize(count).unwrap();
        store
    }

    #[test]
    fn test_initialize_creates_ordered_free_spots() {
        let store = initialized(30);
        let spots = store.list_spots().unwrap();
        assert_eq!(spots.len(), 30);
        assert_eq!(spots[0].id, SpotId(1));
        assert_eq!(spots[0].code, "V1");
        assert_eq!(spots[29].code, "V30");
        assert!(spots.iter().all(Spot::is_free));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut store = initialized(30);
        store.initialize(30).unwrap();
        store.initialize(10).unwrap();
        assert_eq!(store.list_spots().unwrap().len(), 30);
    }

    #[test]
    fn test_first_free_scans_ascending() {
        let mut store = initialized(3);
        store.set_status(SpotId(1), SpotStatus::Occupied).unwrap();
        assert_eq!(store.find_first_free().unwrap(), Some(SpotId(2)));
        store.set_status(SpotId(2), SpotStatus::Occupied).unwrap();
        store.set_status(SpotId(3), SpotStatus::Occupied).unwrap();
        assert_eq!(store.find_first_free().unwrap(), None);
    }

    #[test]
    fn test_set_status_unknown_spot() {
        let mut store = initialized(2);
        let result = store.set_status(SpotId(99), SpotStatus::Occupied);
        assert!(matches!(result, Err(ParkingError::UnknownSpot { .. })));
    }

    #[test]
    fn test_open_ticket_rejects_duplicate_plate() {
        let mut store = initialized(2);
        let now = Utc::now();
        store.open_ticket("ABC123", SpotId(1), now).unwrap();
        let result = store.open_ticket("ABC123", SpotId(2), now);
        assert!(matches!(
            result,
            Err(ParkingError::DuplicateActiveTicket { .. })
        ));
    }

    #[test]
    fn test_ticket_ids_are_sequential() {
        let mut store = initialized(3);
        let now = Utc::now();
        let a = store.open_ticket("AAA111", SpotId(1), now).unwrap();
        let b = store.open_ticket("BBB222", SpotId(2), now).unwrap();
        assert_eq!(a, TicketId(1));
        assert_eq!(b, TicketId(2));
    }

    #[test]
    fn test_close_ticket_once() {
        let mut store = initialized(1);
        let now = Utc::now();
        let id = store.open_ticket("ABC123", SpotId(1), now).unwrap();
        store.close_ticket(id, now, 1000).unwrap();
        let result = store.close_ticket(id, now, 1000);
        assert!(matches!(result, Err(ParkingError::AlreadyClosed { .. })));
    }

    #[test]
    fn test_close_unknown_ticket() {
        let mut store = initialized(1);
        let result = store.close_ticket(TicketId(42), Utc::now(), 1000);
        assert!(matches!(result, Err(ParkingError::UnknownTicket { .. })));
    }

    #[test]
    fn test_plate_can_return_after_checkout() {
        let mut store = initialized(1);
        let now = Utc::now();
        let id = store.open_ticket("ABC123", SpotId(1), now).unwrap();
        store.close_ticket(id, now, 1000).unwrap();
        // same plate may open a fresh ticket once the previous one is closed
        store.open_ticket("ABC123", SpotId(1), now).unwrap();
    }

    #[test]
    fn test_summary_counts_closed_tickets_only() {
        let mut store = initialized(3);
        let now = Utc::now();
        let a = store.open_ticket("AAA111", SpotId(1), now).unwrap();
        let b = store.open_ticket("BBB222", SpotId(2), now).unwrap();
        store.open_ticket("CCC333", SpotId(3), now).unwrap();
        store.close_ticket(a, now, 1000).unwrap();
        store.close_ticket(b, now, 3500).unwrap();

        let summary = store.summary().unwrap();
        assert_eq!(summary.closed_count, 2);
        assert_eq!(summary.total_cents, 4500);
    }

    #[test]
    fn test_clear_all_resets_summary() {
        let mut store = initialized(1);
        let now = Utc::now();
        let id = store.open_ticket("ABC123", SpotId(1), now).unwrap();
        store.close_ticket(id, now, 1000).unwrap();
        store.clear_all().unwrap();
        assert_eq!(store.summary().unwrap(), FinancialSummary::default());
    }
}
