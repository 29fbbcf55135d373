//! Phonebook entry-point: loads settings, wires the repository adapter and
//! serves the REST endpoints.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use ortho_config::OrthoConfig;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use phonebook::outbound::persistence::DbPool;
use phonebook::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;

    let (host, port) = settings.bind_addr();
    let mut config = ServerConfig::new(host, port);
    if let Some(pool_config) = settings.pool_config() {
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
        config = config.with_db_pool(pool);
    }

    info!(host, port, "starting phonebook server");
    create_server(config)?.await
}
