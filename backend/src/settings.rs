//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `PHONEBOOK_*` environment variables, configuration files
//! and command-line flags, in OrthoConfig's usual precedence order.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Configuration values for the phonebook server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHONEBOOK")]
pub struct AppSettings {
    /// Interface the HTTP server binds to.
    pub host: Option<String>,
    /// Port the HTTP server listens on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds to wait for a pooled connection before failing.
    pub db_connection_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to `8080`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Address tuple accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host(), self.port())
    }

    /// Build the pool configuration when a database URL is present.
    ///
    /// # Examples
    /// ```
    /// use phonebook::settings::AppSettings;
    ///
    /// let settings = AppSettings {
    ///     host: None,
    ///     port: None,
    ///     database_url: Some("postgres://localhost/phonebook".into()),
    ///     db_max_connections: Some(4),
    ///     db_connection_timeout_secs: None,
    /// };
    /// let pool = settings.pool_config().expect("database configured");
    /// assert_eq!(pool.max_size(), 4);
    /// ```
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        let timeout = Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        );
        Some(
            PoolConfig::new(url)
                .with_max_size(
                    self.db_max_connections
                        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
                )
                .with_connection_timeout(timeout),
        )
    }
}
