//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Phonebook entries.
    users (id) {
        /// Primary key supplied by the caller or generated on insert.
        id -> Varchar,
        /// Display name of the contact.
        name -> Varchar,
        /// Phone number as entered.
        phone -> Varchar,
        /// Insertion timestamp, used to keep listing order stable.
        created_at -> Timestamptz,
    }
}
