//! Author domain model.
//!
//! # Responsibility
//! - Define the persisted author record and its field bounds.
//!
//! # Invariants
//! - `username` is derived (`firstname_lastname`) and unique; the
//!   storage UNIQUE constraint is the arbiter under concurrency.
//! - Authors are created on first use and never updated or deleted by
//!   the normal flow.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a persisted author.
pub type AuthorId = Uuid;

/// Maximum length for author name fields, per the persisted schema.
pub const NAME_MAX_CHARS: usize = 45;

/// Persisted author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable id referenced by articles.
    pub id: AuthorId,
    pub firstname: String,
    pub lastname: String,
    /// Derived as `firstname_lastname` from the email local part.
    pub username: String,
}

impl Author {
    /// Creates an author with a generated stable id.
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), firstname, lastname, username)
    }

    /// Creates an author with a caller-provided stable id.
    ///
    /// Used by read paths that rehydrate persisted rows.
    pub fn with_id(
        id: AuthorId,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
            username: username.into(),
        }
    }

    /// Checks field bounds against the persisted schema.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("username", &self.username),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
            let len = value.chars().count();
            if len > NAME_MAX_CHARS {
                return Err(ValidationError::FieldTooLong {
                    field,
                    len,
                    max: NAME_MAX_CHARS,
                });
            }
        }
        Ok(())
    }
}
