//! Core domain types for the parking lot
//!
//! This module contains the pure domain model: spots, tickets, and the tariff
//! calculator. Nothing here performs I/O; persistence lives in [`crate::storage`]
//! and orchestration in [`crate::engine`].

mod spot;
mod tariff;
mod ticket;

pub use spot::{Spot, SpotId, SpotStatus};
pub use tariff::{compute_fee, format_cents, TariffRates};
pub use ticket::{Ticket, TicketId};
