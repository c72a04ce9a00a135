//! Core domain logic for the byline article service.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::ValidationError;
pub use repo::article_repo::{
    ArticleRepository, ArticleSummary, ArticleView, SqliteArticleRepository,
};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::{RepoError, RepoResult};
pub use service::articles::ArticleService;
pub use service::identity::{DerivedIdentity, EmailPolicy, IdentityService, DEFAULT_EMAIL_DOMAIN};
pub use service::{BlogError, BlogResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
