//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the phonebook endpoints from the inbound layer and the
//! domain types they exchange. The document is exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::domain::{DomainError, ErrorCode, OperationType, User, UserOperation};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Phonebook API",
        description = "HTTP interface for listing and mutating phonebook entries."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::add_user,
        crate::inbound::http::users::edit_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(User, UserOperation, OperationType, DomainError, ErrorCode)),
    tags(
        (name = "users", description = "Operations on phonebook entries")
    )
)]
pub struct ApiDoc;
