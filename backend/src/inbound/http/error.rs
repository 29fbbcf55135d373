//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent `errorCode`/`errorDesc`
//! JSON responses and status codes.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::ports::UserRepositoryError;
use crate::domain::{DomainError, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &DomainError) -> DomainError {
    if matches!(error.code(), ErrorCode::InternalError) {
        DomainError::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

/// Translate a repository failure that escaped the domain into an API error.
///
/// Connection problems are reported as temporarily unavailable; anything
/// else becomes an internal error whose details stay in the logs.
pub fn map_user_repository_error(err: UserRepositoryError) -> DomainError {
    match err {
        UserRepositoryError::Connection { message } => {
            error!(%message, "user repository connection failure reached the HTTP adapter");
            DomainError::service_unavailable("user store temporarily unavailable")
        }
        UserRepositoryError::Query { message } => {
            error!(%message, "user repository query failure reached the HTTP adapter");
            DomainError::internal("user store query failed")
        }
    }
}

/// Render JSON extractor failures with the standard error payload.
///
/// The extractor error stays attached as the cause of the returned error.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected malformed JSON payload");
    let payload = DomainError::invalid_request(format!("invalid request body: {err}"));
    InternalError::from_response(err, payload.error_response()).into()
}

#[cfg(test)]
mod tests;
