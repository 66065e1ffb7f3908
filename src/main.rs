//! Service entry-point: logging bootstrap and server startup.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use user_registry::server::{create_server, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let server = create_server(ServerConfig::new())?;
    server.await
}
