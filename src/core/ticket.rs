use super::SpotId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a parking ticket
///
/// Assigned sequentially by the ticket ledger, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketId(pub u64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vehicle's parking stay
///
/// A ticket is open while `exit_time` is `None`. Closing a ticket sets
/// `exit_time` and `amount` exactly once; a closed ticket is never mutated
/// again. The `spot_id` is a non-owning reference into the spot registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    /// Normalized (trimmed, uppercased) vehicle plate
    pub plate: String,
    pub spot_id: SpotId,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    /// Fee in cents, populated on close
    pub amount: Option<i64>,
}

impl Ticket {
    /// Creates an open ticket
    pub fn new(id: TicketId, plate: impl Into<String>, spot_id: SpotId, entry_time: DateTime<Utc>) -> Self {
        Self {
            id,
            plate: plate.into(),
            spot_id,
            entry_time,
            exit_time: None,
            amount: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticket_is_open() {
        let ticket = Ticket::new(TicketId(1), "ABC123", SpotId(5), Utc::now());
        assert!(ticket.is_open());
        assert!(ticket.amount.is_none());
    }
}
