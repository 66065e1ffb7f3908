//! Root greeting and the crash-isolation exercise endpoint.

use actix_web::{get, HttpResponse};
use tracing::info;

/// Fixed greeting at the service root.
#[get("/")]
pub async fn index() -> HttpResponse {
    info!("greeting requested");
    HttpResponse::Ok().body("hello my first get endpoint")
}

/// Deliberately panic so the recovery middleware can be exercised end to end.
///
/// Control never reaches a response here; the recovery middleware converts
/// the unwind into a 500.
#[get("/panic")]
pub async fn trigger_panic() -> HttpResponse {
    info!("about to panic for the recovery middleware");
    panic!("handler crashed on purpose");
}
