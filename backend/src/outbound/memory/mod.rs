//! In-process `UserRepository` adapter.
//!
//! Keeps entries in insertion order behind a `RwLock`. Used when no database
//! is configured and by integration tests that need real storage semantics
//! without PostgreSQL.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Volatile phonebook store.
///
/// # Examples
/// ```
/// use phonebook::domain::User;
/// use phonebook::domain::ports::UserRepository;
/// use phonebook::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let saved = repo.save(&User::new(None, "Ada", "555")).await.expect("save");
/// assert!(saved.id.is_some());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a store pre-populated with `users`.
    ///
    /// Entries without an id are kept as given and are unreachable by id.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::connection("in-memory user store lock poisoned")
}

fn matches_id(user: &User, id: &UserId) -> bool {
    user.id.as_ref() == Some(id)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|user| matches_id(user, id)).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, UserRepositoryError> {
        let id = user.id.clone().unwrap_or_else(UserId::random);
        let stored = user.clone().with_id(id.clone());

        let mut users = self.users.write().map_err(poisoned)?;
        match users.iter_mut().find(|existing| matches_id(existing, &id)) {
            Some(existing) => *existing = stored.clone(),
            None => users.push(stored.clone()),
        }
        Ok(stored)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.retain(|user| !matches_id(user, id));
        Ok(())
    }
}
