//! Article use-case service.
//!
//! # Responsibility
//! - Persist articles for resolved authors.
//! - Serve the article read surface required by the HTTP layer.
//!
//! # Invariants
//! - `create_article` inserts exactly one row; persistence failures
//!   (including a dangling author reference) propagate to the caller
//!   instead of being logged and discarded.

use crate::model::article::{Article, ArticleId};
use crate::model::author::Author;
use crate::repo::article_repo::{ArticleRepository, ArticleSummary, ArticleView};
use crate::service::{BlogError, BlogResult};
use log::info;

/// Use-case service wrapper for article operations.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one article credited to a resolved author.
    pub fn create_article(&self, title: &str, text: &str, author: &Author) -> BlogResult<Article> {
        let article = Article::new(title, text, author.id);
        self.repo.insert_article(&article)?;

        info!(
            "event=article_create module=articles status=ok article_id={} author_username={}",
            article.id, author.username
        );
        Ok(article)
    }

    /// Gets one article with its author's username.
    pub fn get_article(&self, id: ArticleId) -> BlogResult<ArticleView> {
        self.repo
            .get_article(id)?
            .ok_or(BlogError::NotFound(id))
    }

    /// Lists all articles, oldest first.
    pub fn list_articles(&self) -> BlogResult<Vec<ArticleSummary>> {
        Ok(self.repo.list_articles()?)
    }

    /// Deletes one article by id.
    pub fn delete_article(&self, id: ArticleId) -> BlogResult<()> {
        self.repo.delete_article(id)?;
        info!("event=article_delete module=articles status=ok article_id={id}");
        Ok(())
    }
}
