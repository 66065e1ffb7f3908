//! Correlation gate for the `/user` scope.
//!
//! Every request under the scope must carry an `X-CorrelationId` header whose
//! value parses as a GUID. Requests without one are rejected with a plain 400
//! before any handler runs. The parsed id is attached to the request
//! extensions; no handler consumes it yet, it is propagated for
//! observability.

use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, warn};
use uuid::Uuid;

/// Header carrying the caller-supplied correlation GUID.
pub const CORRELATION_HEADER: &str = "X-CorrelationId";

/// Parsed correlation identifier attached to gated requests.
///
/// Handlers behind [`Correlation`] can take this as an extractor argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromRequest for CorrelationId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let found = req.extensions().get::<CorrelationId>().copied();
        ready(found.ok_or_else(|| {
            actix_web::error::ErrorBadRequest("You have to send correlationId")
        }))
    }
}

/// Middleware factory gating requests on the correlation header.
///
/// # Examples
/// ```
/// use actix_web::{web, App};
/// use user_registry::Correlation;
///
/// let app = App::new().service(web::scope("/user").wrap(Correlation));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Correlation;

impl<S, B> Transform<S, ServiceRequest> for Correlation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationMiddleware { service }))
    }
}

/// Service wrapper produced by [`Correlation`].
pub struct CorrelationMiddleware<S> {
    service: S,
}

impl<S> CorrelationMiddleware<S> {
    fn reject<B: 'static>(
        req: ServiceRequest,
        body: &'static str,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
        let (request, _payload) = req.into_parts();
        let response = HttpResponse::BadRequest().body(body).map_into_right_body();
        Box::pin(ready(Ok(ServiceResponse::new(request, response))))
    }
}

impl<S, B> Service<ServiceRequest> for CorrelationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // An empty header value counts as missing.
        let header = req
            .headers()
            .get(CORRELATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        let Some(raw) = header else {
            warn!(path = %req.path(), "correlation header missing");
            return Self::reject(req, "You have to send correlationId");
        };

        let correlation_id = match raw.parse::<Uuid>() {
            Ok(id) => CorrelationId(id),
            Err(_) => {
                warn!(path = %req.path(), value = %raw, "correlation header is not a GUID");
                return Self::reject(req, "CorrelationId must be a GUID");
            }
        };

        req.extensions_mut().insert(correlation_id);
        debug!(%correlation_id, "correlation id attached");
        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, web, App};
    use rstest::rstest;

    const VALID_GUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    async fn echo_correlation(id: CorrelationId) -> HttpResponse {
        HttpResponse::Ok().body(id.to_string())
    }

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().service(
            web::scope("/user")
                .wrap(Correlation)
                .route("", web::get().to(echo_correlation)),
        )
    }

    #[actix_web::test]
    async fn missing_header_is_rejected_before_the_handler() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get().uri("/user").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        assert_eq!(&body[..], b"You have to send correlationId");
    }

    #[actix_web::test]
    async fn empty_header_value_counts_as_missing() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/user")
            .insert_header((CORRELATION_HEADER, ""))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        assert_eq!(&body[..], b"You have to send correlationId");
    }

    #[rstest]
    #[case::not_a_guid("abc")]
    #[case::truncated("3fa85f64-5717-4562")]
    #[actix_web::test]
    async fn non_guid_header_is_rejected(#[case] value: &str) {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/user")
            .insert_header((CORRELATION_HEADER, value))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        assert_eq!(&body[..], b"CorrelationId must be a GUID");
    }

    #[actix_web::test]
    async fn valid_guid_reaches_the_handler_with_parsed_id() {
        let app = actix_test::init_service(test_app()).await;
        let request = actix_test::TestRequest::get()
            .uri("/user")
            .insert_header((CORRELATION_HEADER, VALID_GUID))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        assert_eq!(&body[..], VALID_GUID.as_bytes());
    }

    #[actix_web::test]
    async fn paths_outside_the_scope_are_not_gated() {
        let app = actix_test::init_service(
            test_app().route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
