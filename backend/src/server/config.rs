//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::Key;
use autoparts::inbound::http::session_config::SessionSettings;
use autoparts::inbound::http::state::DEFAULT_IMPORT_MAX_BYTES;
use autoparts::outbound::persistence::DbPool;

/// Everything `create_server` needs to build the app.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) import_max_bytes: usize,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            key: session.key,
            cookie_secure: session.cookie_secure,
            bind_addr,
            import_max_bytes: DEFAULT_IMPORT_MAX_BYTES,
            db_pool,
        }
    }

    /// Override the workbook upload cap.
    #[must_use]
    pub fn with_import_max_bytes(mut self, bytes: usize) -> Self {
        self.import_max_bytes = bytes;
        self
    }
}
