//! Article domain model.
//!
//! # Responsibility
//! - Define the persisted article record and its field bounds.
//!
//! # Invariants
//! - `author_id` must reference an existing author at creation time;
//!   the storage foreign key is the arbiter.
//! - Articles are created and deleted, never updated in place.

use crate::model::author::AuthorId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a persisted article.
pub type ArticleId = Uuid;

/// Maximum title length, per the persisted schema.
pub const TITLE_MAX_CHARS: usize = 45;

/// Maximum body text length, per the persisted schema.
pub const TEXT_MAX_CHARS: usize = 516;

/// Persisted article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub text: String,
    /// Weak reference to the credited author, resolved at read time.
    pub author_id: AuthorId,
}

impl Article {
    /// Creates an article with a generated stable id.
    pub fn new(title: impl Into<String>, text: impl Into<String>, author_id: AuthorId) -> Self {
        Self::with_id(Uuid::new_v4(), title, text, author_id)
    }

    /// Creates an article with a caller-provided stable id.
    pub fn with_id(
        id: ArticleId,
        title: impl Into<String>,
        text: impl Into<String>,
        author_id: AuthorId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            author_id,
        }
    }

    /// Checks field bounds against the persisted schema.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value, max) in [
            ("title", &self.title, TITLE_MAX_CHARS),
            ("text", &self.text, TEXT_MAX_CHARS),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
            let len = value.chars().count();
            if len > max {
                return Err(ValidationError::FieldTooLong { field, len, max });
            }
        }
        Ok(())
    }
}
