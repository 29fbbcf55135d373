//! Operation envelope returned by phonebook mutations.
//!
//! Purpose: describe what was attempted, on which entry, and whether or how it
//! failed, using one shape for every outcome.
//!
//! ## Invariants
//! - `operation_type` always reflects the requested action, regardless of
//!   outcome.
//! - The rendered `operation_status` always starts with `success` or `fail`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// Mutation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// `post_user`.
    Add,
    /// `edit_user`.
    Edit,
    /// `delete_user`.
    Delete,
}

impl OperationType {
    /// Wire name of the operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SUCCESS: &str = "success";
const FAIL: &str = "fail";
const USER_ID_IS_NULL: &str = "fail-user id is null";
const USER_DOES_NOT_EXIST: &str = "fail-user does not exist";
const FAIL_CLASS_PREFIX: &str = "fail-class ";

/// Outcome of a mutation.
///
/// Serialised as its string rendering, e.g. `"success"`,
/// `"fail-user does not exist"` or `"fail-class <kind>"`.
///
/// # Examples
/// ```
/// use phonebook::domain::OperationStatus;
///
/// let status = OperationStatus::fail_class("std::io::Error::Other");
/// assert_eq!(status.to_string(), "fail-class std::io::Error::Other");
/// assert!(status.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperationStatus {
    /// The mutation was applied.
    Success,
    /// Edit request without an id.
    Fail,
    /// Delete request without an id.
    UserIdIsNull,
    /// The referenced entry is not stored.
    UserDoesNotExist,
    /// The repository raised a failure identified by `kind`.
    FailClass {
        /// Fully qualified error type and variant.
        kind: String,
    },
}

impl OperationStatus {
    /// Build a [`OperationStatus::FailClass`] for the given failure kind.
    pub fn fail_class(kind: impl Into<String>) -> Self {
        Self::FailClass { kind: kind.into() }
    }

    /// Whether the status reports a failure.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Success)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str(SUCCESS),
            Self::Fail => f.write_str(FAIL),
            Self::UserIdIsNull => f.write_str(USER_ID_IS_NULL),
            Self::UserDoesNotExist => f.write_str(USER_DOES_NOT_EXIST),
            Self::FailClass { kind } => write!(f, "{FAIL_CLASS_PREFIX}{kind}"),
        }
    }
}

/// Error returned when a status string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised operation status: {0}")]
pub struct OperationStatusParseError(String);

impl FromStr for OperationStatus {
    type Err = OperationStatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            SUCCESS => Ok(Self::Success),
            FAIL => Ok(Self::Fail),
            USER_ID_IS_NULL => Ok(Self::UserIdIsNull),
            USER_DOES_NOT_EXIST => Ok(Self::UserDoesNotExist),
            other => match other.strip_prefix(FAIL_CLASS_PREFIX) {
                Some(kind) if !kind.trim().is_empty() => Ok(Self::fail_class(kind)),
                _ => Err(OperationStatusParseError(other.to_owned())),
            },
        }
    }
}

impl TryFrom<String> for OperationStatus {
    type Error = OperationStatusParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperationStatus> for String {
    fn from(value: OperationStatus) -> Self {
        value.to_string()
    }
}

/// Result envelope for a single mutation.
///
/// `user_id` is `None` only when the request carried no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserOperation {
    /// Id of the affected entry, when known.
    #[schema(value_type = Option<String>)]
    pub user_id: Option<UserId>,
    /// Requested mutation.
    pub operation_type: OperationType,
    /// Outcome rendered as `success` or a `fail` variant.
    #[schema(value_type = String, example = "success")]
    pub operation_status: OperationStatus,
}

impl UserOperation {
    /// Build an envelope.
    pub fn new(
        user_id: Option<UserId>,
        operation_type: OperationType,
        operation_status: OperationStatus,
    ) -> Self {
        Self {
            user_id,
            operation_type,
            operation_status,
        }
    }

    /// Whether the mutation was applied.
    pub fn is_success(&self) -> bool {
        !self.operation_status.is_failure()
    }
}
