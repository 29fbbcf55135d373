//! Phonebook domain service.
//!
//! This module implements the driving ports for phonebook entries. Mutations
//! never raise: validation, missing entries and repository failures all
//! resolve to a [`UserOperation`]. Listing is the exception and returns the
//! repository error untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    FailureKind, UserCommand, UserRepository, UserRepositoryError, UsersQuery,
};
use crate::domain::{OperationStatus, OperationType, User, UserId, UserOperation};

/// Phonebook service implementing the driving ports.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use phonebook::domain::UserService;
/// use phonebook::domain::ports::FixtureUserRepository;
///
/// let service = UserService::new(Arc::new(FixtureUserRepository));
/// # let _ = service;
/// ```
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Render a caught repository failure as a `fail-class` status.
fn fail_class<E>(operation: OperationType, user_id: Option<&UserId>, error: &E) -> OperationStatus
where
    E: FailureKind + std::fmt::Display,
{
    let kind = error.failure_kind();
    warn!(
        operation = %operation,
        user_id = user_id.map(UserId::as_str),
        kind = %kind,
        error = %error,
        "repository call failed"
    );
    OperationStatus::fail_class(kind)
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Return every entry exactly as the repository lists them.
    ///
    /// # Errors
    ///
    /// Repository failures are returned unchanged.
    pub async fn get_all_users(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.repository.find_all().await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    /// Save `user` and report the id of the stored record.
    ///
    /// No id validation happens here; the repository may assign one. On
    /// failure the envelope carries the input id.
    pub async fn post_user(&self, user: User) -> UserOperation {
        debug!(user_id = user.id().map(UserId::as_str), "adding user");
        match self.repository.save(&user).await {
            Ok(saved) => UserOperation::new(saved.id, OperationType::Add, OperationStatus::Success),
            Err(error) => {
                let status = fail_class(OperationType::Add, user.id(), &error);
                UserOperation::new(user.id, OperationType::Add, status)
            }
        }
    }

    /// Replace an existing entry.
    ///
    /// Requests without an id fail before the repository is consulted.
    pub async fn edit_user(&self, user: User) -> UserOperation {
        let Some(id) = user.id.clone() else {
            debug!("edit rejected: missing user id");
            return UserOperation::new(None, OperationType::Edit, OperationStatus::Fail);
        };
        debug!(user_id = %id, "editing user");

        let status = match self.repository.find_by_id(&id).await {
            Ok(None) => OperationStatus::UserDoesNotExist,
            Ok(Some(_)) => match self.repository.save(&user).await {
                Ok(_) => OperationStatus::Success,
                Err(error) => fail_class(OperationType::Edit, Some(&id), &error),
            },
            Err(error) => fail_class(OperationType::Edit, Some(&id), &error),
        };
        UserOperation::new(Some(id), OperationType::Edit, status)
    }

    /// Remove an existing entry.
    ///
    /// Requests without an id fail before the repository is consulted. A
    /// second delete of the same id reports that the user does not exist.
    pub async fn delete_user(&self, user: User) -> UserOperation {
        let Some(id) = user.id else {
            debug!("delete rejected: missing user id");
            return UserOperation::new(None, OperationType::Delete, OperationStatus::UserIdIsNull);
        };
        debug!(user_id = %id, "deleting user");

        let status = match self.repository.find_by_id(&id).await {
            Ok(None) => OperationStatus::UserDoesNotExist,
            Ok(Some(_)) => match self.repository.delete_by_id(&id).await {
                Ok(()) => OperationStatus::Success,
                Err(error) => fail_class(OperationType::Delete, Some(&id), &error),
            },
            Err(error) => fail_class(OperationType::Delete, Some(&id), &error),
        };
        UserOperation::new(Some(id), OperationType::Delete, status)
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepositoryError> {
        Self::get_all_users(self).await
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn post_user(&self, user: User) -> UserOperation {
        Self::post_user(self, user).await
    }

    async fn edit_user(&self, user: User) -> UserOperation {
        Self::edit_user(self, user).await
    }

    async fn delete_user(&self, user: User) -> UserOperation {
        Self::delete_user(self, user).await
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
