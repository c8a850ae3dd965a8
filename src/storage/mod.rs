//! Storage layer: repository traits and their implementations
//!
//! The engine only sees the [`SpotRepository`] and [`TicketRepository`]
//! traits. [`MemoryStore`] backs tests and in-process embedding;
//! [`FileStorage`] persists the lot state as YAML under the lot directory,
//! acquiring and releasing the file within each operation.

mod file;
mod memory;
mod repository;

pub use file::FileStorage;
pub use memory::{LotState, MemoryStore};
pub use repository::{FinancialSummary, ParkingStore, SpotRepository, TicketRepository};

/// Directory name that marks a lot root
pub const LOT_DIR_NAME: &str = ".park-ledger";

/// File holding the serialized lot state inside the lot directory
pub const STATE_FILE_NAME: &str = "lot.yaml";
