//! HTTP adapter: handlers and response shaping.

pub mod error;
pub mod greeting;
pub mod users;

pub use error::{ApiError, ApiResult, ErrorDetail, ErrorResponse};
