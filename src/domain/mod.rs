//! Domain types: user records, field validation, and the in-memory store.

pub mod store;
pub mod user;
pub mod validation;

pub use store::{InMemoryUserStore, StoreError, UserStore};
pub use user::{generate_uid, UserCreateRequest, UserListResponse, UserRecord};
pub use validation::{validate_user, Constraint, Violation};
