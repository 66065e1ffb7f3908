//! In-memory user-registration HTTP service.
//!
//! The service accepts user creation requests, validates them against a
//! declared constraint set, assigns a random identifier, and keeps the
//! created records in process memory for the lifetime of the process.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod server;

pub use middleware::{CatchPanic, Correlation, RequestLog};
