use crate::core::{Spot, SpotId, SpotStatus, Ticket, TicketId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Repository trait for the fixed collection of spots
///
/// Implementations own the spot records; callers never construct spots
/// directly after initialization.
pub trait SpotRepository {
    /// Creates `count` free spots numbered 1..=count
    ///
    /// Idempotent: when spots already exist this is a no-op, regardless of
    /// the requested count.
    fn initialize(&mut self, count: u32) -> Result<()>;

    /// All spots, ordered by ascending id
    fn list_spots(&self) -> Result<Vec<Spot>>;

    /// Looks up a single spot by id
    fn spot(&self, id: SpotId) -> Result<Spot>;

    /// First free spot by ascending id, `None` when the lot is full
    fn find_first_free(&self) -> Result<Option<SpotId>>;

    /// Updates a spot's occupancy status
    fn set_status(&mut self, id: SpotId, status: SpotStatus) -> Result<()>;
}

/// Repository trait for parking tickets
///
/// Implementations own the ticket records and enforce the
/// one-open-ticket-per-plate invariant at the storage boundary.
pub trait TicketRepository {
    /// Opens a ticket for a normalized plate
    ///
    /// Fails with `DuplicateActiveTicket` when an open ticket for the plate
    /// already exists.
    fn open_ticket(
        &mut self,
        plate: &str,
        spot_id: SpotId,
        entry_time: DateTime<Utc>,
    ) -> Result<TicketId>;

    /// The open ticket for a plate, if any
    fn find_active_by_plate(&self, plate: &str) -> Result<Option<Ticket>>;

    /// Closes a ticket, setting exit time and amount exactly once
    ///
    /// Fails with `AlreadyClosed` when the ticket has an exit time, or
    /// `UnknownTicket` when the id is absent.
    fn close_ticket(&mut self, id: TicketId, exit_time: DateTime<Utc>, amount: i64) -> Result<()>;

    /// Discards every ticket; used only by the full reset
    fn clear_all(&mut self) -> Result<()>;

    /// All tickets, open and closed, ordered by ascending id
    fn list_tickets(&self) -> Result<Vec<Ticket>>;

    /// Aggregate over closed tickets only
    fn summary(&self) -> Result<FinancialSummary>;
}

/// Combined store trait the engine operates on
pub trait ParkingStore: SpotRepository + TicketRepository {}

impl<T> ParkingStore for T where T: SpotRepository + TicketRepository {}

/// Aggregate of the closed tickets in the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    /// Number of closed tickets
    pub closed_count: u64,
    /// Sum of closed-ticket amounts, in cents
    pub total_cents: i64,
}
