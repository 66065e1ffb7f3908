//! Actix middleware: request logging, correlation gating, crash isolation.

pub mod correlation;
pub mod recovery;
pub mod request_log;

pub use correlation::{Correlation, CorrelationId, CORRELATION_HEADER};
pub use recovery::CatchPanic;
pub use request_log::RequestLog;
