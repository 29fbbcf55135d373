//! Phonebook user data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identifier of a phonebook entry.
///
/// Identifiers are opaque strings chosen by the caller or assigned by the
/// repository when a new entry is saved without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random [`UserId`] backed by a UUID v4.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Phonebook entry.
///
/// ## Invariants
/// - `id` is `None` for entries that have not been persisted yet. Edit and
///   delete requests without an id are rejected by the service.
///
/// # Examples
/// ```
/// use phonebook::domain::{User, UserId};
///
/// let user = User::new(Some("id".into()), "Ada", "+44 20 7946 0000");
/// assert_eq!(user.id().map(UserId::as_str), Some("id"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Stored identifier; `None` for entries not yet saved.
    #[schema(value_type = Option<String>)]
    pub id: Option<UserId>,
    /// Contact name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Phone number as entered.
    #[schema(example = "+44 20 7946 0000")]
    pub phone: String,
}

impl User {
    /// Build a new [`User`].
    pub fn new(id: Option<UserId>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Identifier, if the entry has one.
    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    /// Return a copy of this entry carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialises_missing_id_as_null() {
        let user = User::new(None, "name", "phone");
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(value, json!({ "id": null, "name": "name", "phone": "phone" }));
    }

    #[rstest]
    fn deserialises_plain_string_id() {
        let user: User =
            serde_json::from_value(json!({ "id": "id", "name": "name", "phone": "phone" }))
                .expect("deserialise user");
        assert_eq!(user, User::new(Some(UserId::new("id")), "name", "phone"));
    }

    #[rstest]
    fn absent_id_field_deserialises_as_none() {
        let user: User = serde_json::from_value(json!({ "name": "name", "phone": "phone" }))
            .expect("deserialise user");
        assert!(user.id().is_none());
    }

    #[rstest]
    fn with_id_replaces_identifier() {
        let user = User::new(None, "name", "phone").with_id(UserId::new("assigned"));
        assert_eq!(user.id().map(UserId::as_str), Some("assigned"));
    }

    #[rstest]
    fn random_ids_are_distinct() {
        assert_ne!(UserId::random(), UserId::random());
    }
}
