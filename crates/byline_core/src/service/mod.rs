//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Present the caller-facing error taxonomy: validation, not-found,
//!   storage.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence
//!   contracts.
//! - The only locally recovered failure is the username uniqueness
//!   race inside identity resolution; every other persistence failure
//!   propagates.

use crate::db::DbError;
use crate::model::ValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod articles;
pub mod identity;

pub type BlogResult<T> = Result<T, BlogError>;

/// Caller-facing error taxonomy.
#[derive(Debug)]
pub enum BlogError {
    /// Caller input failed validation (400-equivalent).
    Validation(ValidationError),
    /// The referenced record does not exist (404-equivalent).
    NotFound(Uuid),
    /// The storage layer failed; must be logged, never swallowed
    /// (500-equivalent).
    Storage(RepoError),
}

impl Display for BlogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "not found: {id}"),
            Self::Storage(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for BlogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ValidationError> for BlogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for BlogError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

impl From<DbError> for BlogError {
    fn from(value: DbError) -> Self {
        Self::Storage(RepoError::Db(value))
    }
}
