//! User request and record types plus identifier generation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inbound payload for `POST /user`.
///
/// Every field is optional at the deserialization layer so that absent JSON
/// keys surface as `required` validation violations rather than body decode
/// errors. The password is consumed during creation and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCreateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub age: Option<i64>,
}

/// Stored and returned form of a registered user.
///
/// Records are created once per successful `POST /user` and never mutated or
/// deleted afterwards. No uniqueness is enforced on email or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// 32-character lowercase hex token assigned at creation.
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
}

/// Envelope returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub data: Vec<UserRecord>,
    pub count: usize,
}

/// Generate a user identifier.
///
/// The token is a standards-compliant UUIDv4 hex-encoded as 32 lowercase
/// characters without hyphens. Generation is infallible; callers always
/// receive a non-empty token.
///
/// # Examples
/// ```
/// let uid = user_registry::domain::generate_uid();
/// assert_eq!(uid.len(), 32);
/// ```
#[must_use]
pub fn generate_uid() -> String {
    Uuid::new_v4().as_simple().to_string()
}
