//! Port abstraction for phonebook persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String,
        } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String,
        } => "user repository query failed: {message}",
    }
}

/// Storage contract for phonebook entries.
///
/// Adapters translate storage failures into [`UserRepositoryError`]; they
/// never panic on missing rows. `find_by_id` reports a missing entry as
/// `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every entry in storage order.
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch an entry by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Insert or update an entry and return the stored representation.
    ///
    /// Entries without an id are assigned one by the adapter.
    async fn save(&self, user: &User) -> Result<User, UserRepositoryError>;

    /// Remove the entry with the given identifier.
    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Lookups return nothing, saves echo the input and deletes are accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        Ok(user.clone())
    }

    async fn delete_by_id(&self, _id: &UserId) -> Result<(), UserRepositoryError> {
        Ok(())
    }
}
