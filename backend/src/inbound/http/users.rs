//! Phonebook API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! POST   /api/v1/users {"id":null,"name":"Ada","phone":"555"}
//! PUT    /api/v1/users {"id":"...","name":"Ada","phone":"556"}
//! DELETE /api/v1/users {"id":"...","name":"Ada","phone":"556"}
//! ```
//!
//! Mutations always answer `200 OK` with a `UserOperation`; the envelope's
//! `operation_status` tells the caller whether the change was applied.

use actix_web::{delete, get, post, put, web};
use tracing::instrument;

use crate::domain::{DomainError, User, UserOperation};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_user_repository_error;
use crate::inbound::http::state::HttpState;

/// List every phonebook entry.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Phonebook entries", body = [User]),
        (status = 500, description = "Internal server error", body = DomainError),
        (status = 503, description = "Storage unavailable", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
#[instrument(skip_all)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state
        .users
        .get_all_users()
        .await
        .map_err(map_user_repository_error)?;
    Ok(web::Json(users))
}

/// Add a phonebook entry.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = User,
    responses(
        (status = 200, description = "Operation result", body = UserOperation),
        (status = 400, description = "Malformed body", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/users")]
#[instrument(skip_all)]
pub async fn add_user(
    state: web::Data<HttpState>,
    payload: web::Json<User>,
) -> web::Json<UserOperation> {
    web::Json(state.commands.post_user(payload.into_inner()).await)
}

/// Replace an existing phonebook entry.
#[utoipa::path(
    put,
    path = "/api/v1/users",
    request_body = User,
    responses(
        (status = 200, description = "Operation result", body = UserOperation),
        (status = 400, description = "Malformed body", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "editUser"
)]
#[put("/users")]
#[instrument(skip_all)]
pub async fn edit_user(
    state: web::Data<HttpState>,
    payload: web::Json<User>,
) -> web::Json<UserOperation> {
    web::Json(state.commands.edit_user(payload.into_inner()).await)
}

/// Remove a phonebook entry.
#[utoipa::path(
    delete,
    path = "/api/v1/users",
    request_body = User,
    responses(
        (status = 200, description = "Operation result", body = UserOperation),
        (status = 400, description = "Malformed body", body = DomainError)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users")]
#[instrument(skip_all)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    payload: web::Json<User>,
) -> web::Json<UserOperation> {
    web::Json(state.commands.delete_user(payload.into_inner()).await)
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
