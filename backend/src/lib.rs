//! Phonebook service library.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the entities, the
//! ports and the [`domain::UserService`] use-cases; [`inbound`] exposes them
//! over HTTP; [`outbound`] provides the in-memory and PostgreSQL repository
//! adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
