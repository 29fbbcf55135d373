//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod failure_kind;
mod user_command;
mod user_repository;
mod users_query;

pub use failure_kind::FailureKind;
pub use user_command::{FixtureUserCommand, UserCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
pub use users_query::{FixtureUsersQuery, UsersQuery};
