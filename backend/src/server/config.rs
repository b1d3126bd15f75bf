//! HTTP server configuration object and helpers.

use food_orders::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_prefix: String,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, api_prefix: impl Into<String>, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            api_prefix: api_prefix.into(),
            db_pool,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the route prefix shared by every endpoint.
    #[must_use]
    pub fn api_prefix(&self) -> &str {
        self.api_prefix.as_str()
    }
}
