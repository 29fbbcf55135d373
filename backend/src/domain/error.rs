//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope. On the wire an error is
//! a pair of `errorCode` and `errorDesc`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A downstream dependency is unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `description` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use phonebook::domain::{DomainError, ErrorCode};
///
/// let err = DomainError::new(ErrorCode::NotFound, "missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.description(), "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct DomainError {
    #[serde(rename = "errorCode")]
    code: ErrorCode,
    #[serde(rename = "errorDesc")]
    #[schema(example = "Something went wrong")]
    description: String,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The description was empty or whitespace.
    #[error("error description must not be empty")]
    EmptyDescription,
}

impl DomainError {
    /// Create a new error, panicking if validation fails.
    ///
    /// # Panics
    ///
    /// Panics when `description` is blank. Use [`DomainError::try_new`] for
    /// untrusted input.
    pub fn new(code: ErrorCode, description: impl Into<String>) -> Self {
        match Self::try_new(code, description) {
            Ok(value) => value,
            Err(err) => panic!("error descriptions must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the description.
    pub fn try_new(
        code: ErrorCode,
        description: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ErrorValidationError::EmptyDescription);
        }
        Ok(Self { code, description })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description returned to adapters.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, description)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, description)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, description)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(description: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, description)
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl std::error::Error for DomainError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    error_code: ErrorCode,
    error_desc: String,
}

impl From<DomainError> for ErrorDto {
    fn from(value: DomainError) -> Self {
        Self {
            error_code: value.code,
            error_desc: value.description,
        }
    }
}

impl TryFrom<ErrorDto> for DomainError {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        Self::try_new(value.error_code, value.error_desc)
    }
}
