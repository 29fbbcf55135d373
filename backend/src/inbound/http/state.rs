//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::{UserCommand, UserRepository, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the phonebook.
    pub users: Arc<dyn UsersQuery>,
    /// Mutations, answered with operation envelopes.
    pub commands: Arc<dyn UserCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, commands: Arc<dyn UserCommand>) -> Self {
        Self { users, commands }
    }

    /// Construct state backed by a single [`UserService`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use phonebook::domain::UserService;
    /// use phonebook::inbound::http::state::HttpState;
    /// use phonebook::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
    /// let state = HttpState::from_service(service);
    /// let _users = state.users.clone();
    /// ```
    pub fn from_service<R>(service: UserService<R>) -> Self
    where
        R: UserRepository + 'static,
    {
        let service = Arc::new(service);
        Self {
            users: service.clone(),
            commands: service,
        }
    }
}
