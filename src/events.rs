//! Audit event sink
//!
//! The engine reports every successful state transition to an [`EventSink`].
//! Failed operations are never logged: an event means the transition
//! happened. The file sink appends timestamped text records, one per line,
//! to `events.log` inside the lot directory.

use crate::core::{SpotId, TicketId};
use chrono::{DateTime, Utc};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// File holding the audit log inside the lot directory
pub const EVENT_LOG_FILE_NAME: &str = "events.log";

/// One successful state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkingEvent {
    CheckIn {
        plate: String,
        spot_id: SpotId,
        ticket_id: TicketId,
    },
    CheckOut {
        plate: String,
        spot_id: SpotId,
        ticket_id: TicketId,
        /// Fee in cents
        amount: i64,
    },
    Reset,
}

impl fmt::Display for ParkingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckIn {
                plate,
                spot_id,
                ticket_id,
            } => write!(
                f,
                "Check-in: plate {plate} -> spot {spot_id} (ticket {ticket_id})"
            ),
            Self::CheckOut {
                plate,
                spot_id,
                ticket_id,
                amount,
            } => write!(
                f,
                "Check-out: plate {plate} <- spot {spot_id} (ticket {ticket_id}, amount {})",
                crate::core::format_cents(*amount)
            ),
            Self::Reset => write!(f, "Lot reset: all tickets discarded, all spots freed"),
        }
    }
}

/// Sink for audit events
///
/// Sinks are best-effort collaborators: a sink failure must not fail the
/// operation that produced the event, so `record` is infallible and
/// implementations swallow their own I/O errors (logging them instead).
pub trait EventSink: Send {
    fn record(&mut self, at: DateTime<Utc>, event: &ParkingEvent);
}

/// Append-only text log, one `[timestamp] message` line per event
#[derive(Debug, Clone)]
pub struct FileEventLog {
    path: PathBuf,
}

impl FileEventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EventSink for FileEventLog {
    fn record(&mut self, at: DateTime<Utc>, event: &ParkingEvent) {
        let line = format!("[{}] {event}\n", at.format("%Y-%m-%d %H:%M:%S"));
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to append audit event");
        }
    }
}

/// Sink that discards every event; used in tests and embeddings that do not
/// need an audit trail
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn record(&mut self, _at: DateTime<Utc>, _event: &ParkingEvent) {}
}
