use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a parking spot
///
/// Spot ids are assigned once at lot initialization (1..=count) and never
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpotId(pub u32);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Occupancy status of a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    Free,
    Occupied,
}

impl fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Occupied => write!(f, "occupied"),
        }
    }
}

/// One fixed parking location
///
/// `id` and `code` are immutable after initialization; only `status` is
/// mutated, and only by the parking engine. The status must stay consistent
/// with the ticket ledger: a spot is occupied exactly when one open ticket
/// references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    /// Human-readable label, e.g. "V1"
    pub code: String,
    pub status: SpotStatus,
}

impl Spot {
    /// Creates a free spot with the conventional `V{n}` code
    pub fn new(id: SpotId) -> Self {
        Self {
            code: format!("V{}", id.0),
            id,
            status: SpotStatus::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.status == SpotStatus::Free
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spot_is_free() {
        let spot = Spot::new(SpotId(3));
        assert_eq!(spot.code, "V3");
        assert!(spot.is_free());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SpotStatus::Free.to_string(), "free");
        assert_eq!(SpotStatus::Occupied.to_string(), "occupied");
    }
}
