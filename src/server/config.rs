//! HTTP server configuration object.

use std::net::{Ipv4Addr, SocketAddr};

/// TCP port the shipped binary listens on. The port is fixed; there is no
/// environment or file based override.
pub const SERVICE_PORT: u16 = 3000;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Configuration binding the fixed service port on all interfaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, SERVICE_PORT)),
        }
    }

    /// Override the bind address; tests bind an ephemeral local port.
    #[must_use]
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
