//! Error types for park-ledger
//!
//! Every fallible operation in the crate returns [`Result`]. All errors are
//! typed, returned to the immediate caller, and recoverable: none of them
//! aborts the process. The CLI layer uses [`ParkingError::user_message`] and
//! [`ParkingError::suggestions`] to present failures to the operator.

use crate::core::{SpotId, TicketId};
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, ParkingError>;

/// All error conditions the parking engine and its collaborators can report
#[derive(Debug, Error)]
pub enum ParkingError {
    /// Exit time precedes entry time
    #[error("invalid interval: exit time {exit} precedes entry time {entry}")]
    InvalidInterval {
        entry: chrono::DateTime<chrono::Utc>,
        exit: chrono::DateTime<chrono::Utc>,
    },

    /// Every spot in the lot is occupied
    #[error("the lot is full: no free spot available")]
    LotFull,

    /// Referenced spot id does not exist in the registry
    #[error("unknown spot: {id}")]
    UnknownSpot { id: SpotId },

    /// Manual check-in targeted a spot that is already occupied
    #[error("spot {id} is already occupied")]
    SpotOccupied { id: SpotId },

    /// An open ticket already exists for this plate
    #[error("plate {plate} already has an active ticket")]
    DuplicateActiveTicket { plate: String },

    /// Attempt to close a ticket that already has an exit time
    #[error("ticket {id} is already closed")]
    AlreadyClosed { id: TicketId },

    /// Referenced ticket id does not exist in the ledger
    #[error("unknown ticket: {id}")]
    UnknownTicket { id: TicketId },

    /// Check-out requested for a plate with no open ticket
    #[error("no active ticket for plate {plate}")]
    NoActiveTicket { plate: String },

    /// Plate was empty after trimming
    #[error("plate must not be empty")]
    InvalidPlate,

    /// No lot state found where one was expected
    #[error("lot is not initialized at {path}")]
    LotNotInitialized { path: String },

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lot state or config could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// CSV export failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ParkingError {
    /// Returns a message suitable for direct display to an operator
    pub fn user_message(&self) -> String {
        match self {
            Self::LotFull => "The parking lot is full.".to_string(),
            Self::DuplicateActiveTicket { plate } => {
                format!("Vehicle {plate} is already parked.")
            },
            Self::NoActiveTicket { plate } => {
                format!("No parked vehicle found for plate {plate}.")
            },
            Self::SpotOccupied { id } => format!("Spot {id} is occupied."),
            Self::LotNotInitialized { path } => {
                format!("No parking lot found at {path}.")
            },
            _ => self.to_string(),
        }
    }

    /// Returns actionable suggestions for recovering from this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LotFull => vec![
                "Wait for a vehicle to check out before retrying".to_string(),
                "Run 'park-ledger status' to watch for a free spot".to_string(),
            ],
            Self::DuplicateActiveTicket { plate } => vec![format!(
                "Run 'park-ledger check-out {plate}' to close the existing ticket"
            )],
            Self::NoActiveTicket { .. } => vec![
                "Verify the plate spelling".to_string(),
                "Run 'park-ledger status' to list occupied spots".to_string(),
            ],
            Self::SpotOccupied { .. } => vec![
                "Pick a different spot, or omit --spot to auto-allocate".to_string(),
            ],
            Self::LotNotInitialized { .. } => {
                vec!["Run 'park-ledger init' to create the lot".to_string()]
            },
            Self::InvalidPlate => vec!["Provide a non-empty plate".to_string()],
            _ => vec![],
        }
    }

    /// Whether the caller can retry with corrected input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Serialization(_) | Self::Csv(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SpotId;

    #[test]
    fn test_user_messages_are_not_empty() {
        let errors = vec![
            ParkingError::LotFull,
            ParkingError::InvalidPlate,
            ParkingError::UnknownSpot { id: SpotId(7) },
            ParkingError::DuplicateActiveTicket {
                plate: "ABC123".to_string(),
            },
        ];
        for error in errors {
            assert!(!error.user_message().is_empty());
        }
    }

    #[test]
    fn test_domain_errors_are_recoverable() {
        assert!(ParkingError::LotFull.is_recoverable());
        assert!(
            ParkingError::NoActiveTicket {
                plate: "XYZ999".to_string()
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_io_errors_are_not_recoverable() {
        let io = ParkingError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!io.is_recoverable());
    }
}
