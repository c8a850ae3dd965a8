//! park-ledger - A parking lot occupancy and billing engine
//!
//! This crate tracks per-spot occupancy in a fixed-size lot, opens and
//! closes per-vehicle tickets, and computes parking fees under a tiered
//! time-based tariff. The core is a synchronous request/response engine
//! over injected repositories; the CLI in this crate is one thin surface
//! over it.
//!
//! # Concurrent Safety
//!
//! All mutating engine operations run as critical sections under a single
//! lock, so a spot is never observed occupied without its open ticket (or
//! vice versa). The tariff calculator is pure and needs no synchronization.
//!
//! # Example
//!
//! ```rust
//! use park_ledger::core::TariffRates;
//! use park_ledger::engine::ParkingEngine;
//! use park_ledger::storage::MemoryStore;
//!
//! # fn main() -> park_ledger::Result<()> {
//! let engine = ParkingEngine::new(MemoryStore::new(), TariffRates::default());
//! engine.initialize(30)?;
//!
//! let receipt = engine.check_in("abc123")?;
//! assert_eq!(receipt.spot_code, "V1");
//!
//! let settled = engine.check_out("ABC123")?;
//! assert_eq!(settled.amount, 1000); // first-hour rate, in cents
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod events;
pub mod storage;

// Re-export commonly used types
pub use error::{ParkingError, Result};
