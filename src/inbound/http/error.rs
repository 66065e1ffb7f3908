//! Handler error types and the validation failure envelope.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::domain::{StoreError, Violation};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// One field-level entry in the validation failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub field_name: String,
    pub description: String,
}

/// Envelope returned with status 400 when validation fails.
///
/// Wire shape: `{"status": 400, "errorDetail": [{"fieldName", "description"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    #[serde(rename = "errorDetail")]
    pub error_detail: Vec<ErrorDetail>,
}

impl ErrorResponse {
    /// Build the envelope from collected violations.
    #[must_use]
    pub fn from_violations(violations: &[Violation]) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST.as_u16(),
            error_detail: violations
                .iter()
                .map(|violation| ErrorDetail {
                    field_name: violation.field.to_owned(),
                    description: violation.description(),
                })
                .collect(),
        }
    }
}

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed field validation.
    #[error("request failed validation")]
    Validation(Vec<Violation>),
    /// `GET /user` found an empty store.
    #[error("there is no user")]
    NoUsers,
    /// Store access failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NoUsers => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(violations) => {
                HttpResponse::BadRequest().json(ErrorResponse::from_violations(violations))
            }
            ApiError::NoUsers => HttpResponse::NotFound().body("There is no user"),
            ApiError::Store(err) => {
                // Do not leak lock internals to clients.
                error!(error = %err, "store access failed");
                HttpResponse::InternalServerError().body("Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Constraint;
    use actix_web::body::to_bytes;

    fn sample_violations() -> Vec<Violation> {
        vec![
            Violation {
                field: "firstName",
                constraint: Constraint::Required,
                value: String::new(),
            },
            Violation {
                field: "age",
                constraint: Constraint::MinAge(18),
                value: "12".into(),
            },
        ]
    }

    #[test]
    fn envelope_uses_wire_field_names() {
        let envelope = ErrorResponse::from_violations(&sample_violations());
        let value = serde_json::to_value(&envelope).expect("envelope serializes");
        assert_eq!(value["status"], 400);
        let detail = value["errorDetail"].as_array().expect("errorDetail array");
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0]["fieldName"], "firstName");
        assert_eq!(detail[0]["description"], "firstName is required");
        assert_eq!(detail[1]["fieldName"], "age");
    }

    #[test]
    fn status_codes_match_error_variants() {
        let cases = [
            (ApiError::Validation(sample_violations()), StatusCode::BAD_REQUEST),
            (ApiError::NoUsers, StatusCode::NOT_FOUND),
            (
                ApiError::Store(StoreError::Poisoned),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }

    #[actix_web::test]
    async fn no_users_renders_plain_text_body() {
        let response = ApiError::NoUsers.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        assert_eq!(&bytes[..], b"There is no user");
    }

    #[actix_web::test]
    async fn validation_error_renders_envelope_json() {
        let response = ApiError::Validation(sample_violations()).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let envelope: ErrorResponse = serde_json::from_slice(&bytes).expect("envelope decodes");
        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.error_detail[0].field_name, "firstName");
    }
}
