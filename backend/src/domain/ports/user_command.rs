//! Driving port for phonebook mutations.
//!
//! Every mutation resolves to a [`UserOperation`]; failures are reported in
//! the envelope rather than raised, so implementations are infallible at the
//! type level.

use async_trait::async_trait;

use crate::domain::{OperationStatus, OperationType, User, UserOperation};

/// Domain use-case port for adding, editing and deleting entries.
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Persist a new entry.
    async fn post_user(&self, user: User) -> UserOperation;

    /// Update an existing entry.
    async fn edit_user(&self, user: User) -> UserOperation;

    /// Remove an existing entry.
    async fn delete_user(&self, user: User) -> UserOperation;
}

/// Fixture command that acknowledges every request as successful.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserCommand;

#[async_trait]
impl UserCommand for FixtureUserCommand {
    async fn post_user(&self, user: User) -> UserOperation {
        UserOperation::new(user.id, OperationType::Add, OperationStatus::Success)
    }

    async fn edit_user(&self, user: User) -> UserOperation {
        UserOperation::new(user.id, OperationType::Edit, OperationStatus::Success)
    }

    async fn delete_user(&self, user: User) -> UserOperation {
        UserOperation::new(user.id, OperationType::Delete, OperationStatus::Success)
    }
}
