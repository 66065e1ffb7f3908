//! Crash isolation: convert handler panics into 500 responses.
//!
//! A panicking handler must not take the process down, so the unwind is
//! caught at this boundary and answered with a plain 500. Faults that abort
//! instead of unwinding (stack overflow, allocation failure) remain outside
//! the boundary's reach.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use futures_util::FutureExt;
use tracing::error;

/// Middleware factory wrapping all downstream handlers in a panic boundary.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::CatchPanic;
///
/// let app = App::new().wrap(CatchPanic);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchPanic;

impl<S, B> Transform<S, ServiceRequest> for CatchPanic
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = CatchPanicMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CatchPanicMiddleware { service }))
    }
}

/// Service wrapper produced by [`CatchPanic`].
pub struct CatchPanicMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CatchPanicMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Keep a handle on the request so a 500 can be produced after the
        // downstream future is lost to an unwind.
        let (request, payload) = req.into_parts();
        let downstream = ServiceRequest::from_parts(request.clone(), payload);
        let fut = AssertUnwindSafe(self.service.call(downstream)).catch_unwind();
        Box::pin(async move {
            match fut.await {
                Ok(res) => res.map(ServiceResponse::map_into_boxed_body),
                Err(panic) => {
                    error!(
                        panic = panic_message(panic.as_ref()),
                        path = %request.path(),
                        "handler panicked; responding 500"
                    );
                    Ok(ServiceResponse::new(
                        request,
                        HttpResponse::InternalServerError().body("Internal Server Error"),
                    ))
                }
            }
        })
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
