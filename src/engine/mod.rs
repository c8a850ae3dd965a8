//! Parking engine: the orchestrator over spots, tickets, and the tariff
//!
//! The engine drives the per-stay state machine (unparked -> parked ->
//! settled). Every mutating operation runs as a critical section under a
//! single mutex, so no observer can see a spot marked occupied without its
//! open ticket or vice versa. Operations are synchronous request/response:
//! the engine never retries, and every failure is a typed error the caller
//! can act on.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::core::{compute_fee, Spot, SpotId, SpotStatus, TariffRates, Ticket, TicketId};
use crate::error::{ParkingError, Result};
use crate::events::{EventSink, NullEventSink, ParkingEvent};
use crate::storage::{FinancialSummary, ParkingStore};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Result of a successful check-in
#[derive(Debug, Clone, Serialize)]
pub struct CheckIn {
    pub ticket_id: TicketId,
    pub plate: String,
    pub spot_id: SpotId,
    pub spot_code: String,
    pub entry_time: DateTime<Utc>,
}

/// Result of a successful check-out
#[derive(Debug, Clone, Serialize)]
pub struct CheckOut {
    pub ticket_id: TicketId,
    pub plate: String,
    pub spot_id: SpotId,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    /// Fee in cents
    pub amount: i64,
}

impl CheckOut {
    /// Elapsed stay duration
    pub fn duration(&self) -> Duration {
        self.exit_time - self.entry_time
    }
}

struct Inner<S> {
    store: S,
    events: Box<dyn EventSink>,
}

/// Orchestrator over a combined spot/ticket store
///
/// Generic over the store so tests run against `MemoryStore` and the CLI
/// against `FileStorage`. The clock and event sink are injected
/// collaborators; defaults are the system clock and a discarding sink.
pub struct ParkingEngine<S> {
    inner: Mutex<Inner<S>>,
    rates: TariffRates,
    clock: Box<dyn Clock>,
}

impl<S: ParkingStore> ParkingEngine<S> {
    pub fn new(store: S, rates: TariffRates) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store,
                events: Box::new(NullEventSink),
            }),
            rates,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the clock collaborator
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the event sink collaborator
    #[must_use]
    pub fn with_event_sink(self, events: impl EventSink + 'static) -> Self {
        self.lock().events = Box::new(events);
        self
    }

    pub fn rates(&self) -> &TariffRates {
        &self.rates
    }

    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        // A poisoned lock means a panic mid-operation; the store itself is
        // only mutated through infallible in-memory steps, so continuing
        // with the inner value is sound.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates the fixed spot set; idempotent
    pub fn initialize(&self, spot_count: u32) -> Result<()> {
        self.lock().store.initialize(spot_count)
    }

    /// Checks a vehicle in, auto-allocating the first free spot
    ///
    /// Fails with `DuplicateActiveTicket` when the plate already has an open
    /// ticket, or `LotFull` when no spot is free; neither failure changes
    /// any state.
    pub fn check_in(&self, plate: &str) -> Result<CheckIn> {
        let plate = normalize_plate(plate)?;
        let mut inner = self.lock();

        ensure_not_parked(&inner.store, &plate)?;
        let spot_id = inner
            .store
            .find_first_free()?
            .ok_or(ParkingError::LotFull)?;

        self.admit(&mut inner, &plate, spot_id)
    }

    /// Checks a vehicle in to an operator-selected spot
    ///
    /// Fails with `UnknownSpot` when the id is absent and `SpotOccupied`
    /// when the target spot is not free.
    pub fn check_in_manual(&self, plate: &str, spot_id: SpotId) -> Result<CheckIn> {
        let plate = normalize_plate(plate)?;
        let mut inner = self.lock();

        ensure_not_parked(&inner.store, &plate)?;
        let spot = inner.store.spot(spot_id)?;
        if !spot.is_free() {
            return Err(ParkingError::SpotOccupied { id: spot_id });
        }

        self.admit(&mut inner, &plate, spot_id)
    }

    /// Opens the ticket and marks the spot occupied; caller holds the lock
    /// and has verified the spot is free and the plate is not parked
    fn admit(&self, inner: &mut Inner<S>, plate: &str, spot_id: SpotId) -> Result<CheckIn> {
        let entry_time = self.clock.now();
        let spot_code = inner.store.spot(spot_id)?.code;
        let ticket_id = inner.store.open_ticket(plate, spot_id, entry_time)?;
        inner.store.set_status(spot_id, SpotStatus::Occupied)?;

        tracing::info!(%plate, %spot_id, %ticket_id, "vehicle checked in");
        inner.events.record(
            entry_time,
            &ParkingEvent::CheckIn {
                plate: plate.to_string(),
                spot_id,
                ticket_id,
            },
        );

        Ok(CheckIn {
            ticket_id,
            plate: plate.to_string(),
            spot_id,
            spot_code,
            entry_time,
        })
    }

    /// Checks a vehicle out, computing the fee at the current time
    ///
    /// Fails with `NoActiveTicket` when the plate has no open ticket.
    pub fn check_out(&self, plate: &str) -> Result<CheckOut> {
        let plate = normalize_plate(plate)?;
        let mut inner = self.lock();

        let ticket = inner
            .store
            .find_active_by_plate(&plate)?
            .ok_or_else(|| ParkingError::NoActiveTicket {
                plate: plate.clone(),
            })?;

        let exit_time = self.clock.now();
        let amount = compute_fee(&self.rates, ticket.entry_time, exit_time)?;

        inner.store.close_ticket(ticket.id, exit_time, amount)?;
        inner.store.set_status(ticket.spot_id, SpotStatus::Free)?;

        tracing::info!(%plate, spot_id = %ticket.spot_id, ticket_id = %ticket.id, amount, "vehicle checked out");
        inner.events.record(
            exit_time,
            &ParkingEvent::CheckOut {
                plate: plate.clone(),
                spot_id: ticket.spot_id,
                ticket_id: ticket.id,
                amount,
            },
        );

        Ok(CheckOut {
            ticket_id: ticket.id,
            plate,
            spot_id: ticket.spot_id,
            entry_time: ticket.entry_time,
            exit_time,
            amount,
        })
    }

    /// Administrative hard reset: discards every ticket and frees every spot
    pub fn reset_all(&self) -> Result<()> {
        let mut inner = self.lock();

        inner.store.clear_all()?;
        let spots = inner.store.list_spots()?;
        for spot in spots {
            inner.store.set_status(spot.id, SpotStatus::Free)?;
        }

        tracing::info!("lot reset");
        let now = self.clock.now();
        inner.events.record(now, &ParkingEvent::Reset);
        Ok(())
    }

    /// Count and total amount of closed tickets
    pub fn financial_summary(&self) -> Result<FinancialSummary> {
        self.lock().store.summary()
    }

    /// All spots ordered by id
    pub fn list_spots(&self) -> Result<Vec<Spot>> {
        self.lock().store.list_spots()
    }

    /// All tickets ordered by id, open and closed
    pub fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.lock().store.list_tickets()
    }
}

/// Trims and uppercases a plate, rejecting empty input
fn normalize_plate(plate: &str) -> Result<String> {
    let plate = plate.trim().to_uppercase();
    if plate.is_empty() {
        return Err(ParkingError::InvalidPlate);
    }
    Ok(plate)
}

fn ensure_not_parked<S: ParkingStore>(store: &S, plate: &str) -> Result<()> {
    if store.find_active_by_plate(plate)?.is_some() {
        return Err(ParkingError::DuplicateActiveTicket {
            plate: plate.to_string(),
        });
    }
    Ok(())
}
