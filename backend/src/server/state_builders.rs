//! Builders for HTTP state backed by the configured repository.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use phonebook::domain::UserService;
use phonebook::inbound::http::state::HttpState;
use phonebook::outbound::memory::InMemoryUserRepository;
use phonebook::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Build handler state, preferring PostgreSQL when a pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user repository");
            let repo = DieselUserRepository::new(pool.clone());
            HttpState::from_service(UserService::new(Arc::new(repo)))
        }
        None => {
            info!("using in-memory user repository");
            let repo = InMemoryUserRepository::default();
            HttpState::from_service(UserService::new(Arc::new(repo)))
        }
    };
    web::Data::new(state)
}
