//! Domain primitives, services and ports.
//!
//! Purpose: Define the phonebook entities, the operation envelope returned by
//! mutations, and the service orchestrating the repository port. Nothing here
//! depends on HTTP or on a specific database.
//!
//! Public surface:
//! - DomainError (alias to `error::DomainError`) — transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User, UserId — phonebook entry and its identifier.
//! - UserOperation, OperationType, OperationStatus — mutation envelope.
//! - UserService — driving port implementation over a `UserRepository`.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_operation;
pub mod user_service;

pub use self::error::{DomainError, ErrorCode, ErrorValidationError};
pub use self::user::{User, UserId};
pub use self::user_operation::{
    OperationStatus, OperationStatusParseError, OperationType, UserOperation,
};
pub use self::user_service::UserService;
