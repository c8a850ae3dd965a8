//! Command handlers
//!
//! One module per CLI command, plus the shared [`HandlerContext`]. Handlers
//! resolve the lot, call into the engine, and format the result; all
//! business rules live in [`crate::engine`].

mod check_in;
mod check_out;
mod common;
mod export;
mod init;
mod reset;
mod status;
mod summary;

pub use check_in::handle_check_in;
pub use check_out::handle_check_out;
pub use common::HandlerContext;
pub use export::handle_export;
pub use init::handle_init;
pub use reset::handle_reset;
pub use status::handle_status;
pub use summary::handle_summary;
