//! Author identity resolution.
//!
//! # Responsibility
//! - Validate submitted emails against the configured address policy.
//! - Map each derived username to exactly one persisted author.
//!
//! # Invariants
//! - A rejected email never writes a row.
//! - The UNIQUE constraint on `authors.username` is the sole arbiter
//!   under concurrent resolution; a lost insert race is recovered by
//!   re-reading the winner's row and is never surfaced.

use crate::model::author::Author;
use crate::model::ValidationError;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::RepoError;
use crate::service::{BlogError, BlogResult};
use log::{debug, info};
use regex::Regex;

/// Accepted email domain when none is configured.
pub const DEFAULT_EMAIL_DOMAIN: &str = "bbc.co.uk";

/// Compiled email acceptance policy.
///
/// Accepts `firstname.lastname[digits]@<domain>` with lowercase ASCII
/// local parts, capturing the two name groups.
#[derive(Debug, Clone)]
pub struct EmailPolicy {
    domain: String,
    pattern: Regex,
}

/// Identity derived from a validated email, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentity {
    pub firstname: String,
    pub lastname: String,
    /// `firstname_lastname`; the unique author key.
    pub username: String,
}

impl EmailPolicy {
    /// Compiles a policy accepting the given domain.
    pub fn new(domain: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"^([a-z]+)\.([a-z]+)\d*@{}$",
            regex::escape(domain)
        ))?;
        Ok(Self {
            domain: domain.to_string(),
            pattern,
        })
    }

    /// The accepted email domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Parses an email into its derived identity.
    pub fn parse(&self, email: &str) -> Result<DerivedIdentity, ValidationError> {
        let captures =
            self.pattern
                .captures(email)
                .ok_or_else(|| ValidationError::InvalidEmail {
                    email: email.to_string(),
                })?;

        let firstname = captures[1].to_string();
        let lastname = captures[2].to_string();
        let username = format!("{firstname}_{lastname}");

        Ok(DerivedIdentity {
            firstname,
            lastname,
            username,
        })
    }
}

/// Use-case service resolving emails to persisted authors.
pub struct IdentityService<R: AuthorRepository> {
    repo: R,
    policy: EmailPolicy,
}

impl<R: AuthorRepository> IdentityService<R> {
    /// Creates a service using the provided repository and policy.
    pub fn new(repo: R, policy: EmailPolicy) -> Self {
        Self { repo, policy }
    }

    /// Resolves an email to an existing or newly persisted author.
    ///
    /// # Contract
    /// - Non-matching emails fail with `BlogError::Validation` and
    ///   write nothing.
    /// - Calls deriving the same username return the same underlying
    ///   row, including under concurrent insertion.
    pub fn resolve_author(&self, email: &str) -> BlogResult<Author> {
        let identity = self.policy.parse(email)?;

        if let Some(existing) = self.repo.find_by_username(&identity.username)? {
            return Ok(existing);
        }

        let author = Author::new(identity.firstname, identity.lastname, identity.username);
        match self.repo.insert_author(&author) {
            Ok(_) => {
                info!(
                    "event=author_resolve module=identity status=created username={}",
                    author.username
                );
                Ok(author)
            }
            Err(RepoError::UniqueViolation { .. }) => {
                // Lost the insert race; the committed row is authoritative.
                debug!(
                    "event=author_resolve module=identity status=race_recovered username={}",
                    author.username
                );
                match self.repo.find_by_username(&author.username)? {
                    Some(winner) => Ok(winner),
                    None => Err(BlogError::Storage(RepoError::InvalidData(format!(
                        "username `{}` reported as taken but no row matches it",
                        author.username
                    )))),
                }
            }
            Err(other) => Err(other.into()),
        }
    }
}
