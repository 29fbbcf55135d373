//! Driving port for listing phonebook entries.
//!
//! Inbound adapters use this port to read entries without importing outbound
//! persistence concerns. Failures are the repository's own errors; the
//! adapter decides how to present them.

use async_trait::async_trait;

use crate::domain::User;

use super::UserRepositoryError;

/// Domain use-case port for listing users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every entry in repository order.
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepositoryError>;
}

/// Fixture users query returning an empty phonebook.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(Vec::new())
    }
}
