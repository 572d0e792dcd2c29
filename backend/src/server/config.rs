//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) start_empty: bool,
    pub(crate) clock: Arc<dyn Clock>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            start_empty: false,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Start with an empty directory instead of the demo roster.
    #[must_use]
    pub fn with_start_empty(mut self, start_empty: bool) -> Self {
        self.start_empty = start_empty;
        self
    }
}
