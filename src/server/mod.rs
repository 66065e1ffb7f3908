//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, SERVICE_PORT};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse, HttpServer};

use crate::domain::{InMemoryUserStore, UserStore};
use crate::inbound::http::greeting::{index, trigger_panic};
use crate::inbound::http::users::{create_user, echo_user_id, list_users};
use crate::middleware::{CatchPanic, Correlation, RequestLog};

/// JSON extraction config: malformed bodies always answer a fixed 400 with
/// the decode error text instead of the framework default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().body(body),
        )
        .into()
    })
}

/// Assemble the application: store state, middleware stack, and routes.
///
/// The correlation gate covers only the `/user` scope; request logging and
/// the panic boundary cover everything.
pub fn build_app(
    store: web::Data<dyn UserStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let user_scope = web::scope("/user")
        .wrap(Correlation)
        .app_data(json_config())
        .service(create_user)
        .service(list_users)
        .service(echo_user_id);

    App::new()
        .app_data(store)
        .service(user_scope)
        .service(index)
        .service(trigger_panic)
        .wrap(CatchPanic)
        .wrap(RequestLog)
}

/// Construct an Actix HTTP server bound per `config`, with a fresh empty
/// store shared by all workers.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let store = web::Data::from(store);

    let server = HttpServer::new(move || build_app(store.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}
