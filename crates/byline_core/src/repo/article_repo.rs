//! Article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist article rows and serve the read surface (list, detail
//!   with author username, delete).
//!
//! # Invariants
//! - `insert_article` validates before the SQL mutation; referential
//!   integrity failures surface as `ForeignKeyViolation`, never get
//!   swallowed.
//! - List ordering is insertion order (oldest first).

use crate::model::article::{Article, ArticleId};
use crate::repo::{ensure_connection_ready, parse_stored_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection};
use serde::Serialize;

/// List read model: one row per article, insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
}

/// Detail read model with the author username resolved by join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub title: String,
    pub text: String,
    pub author_username: String,
}

/// Repository interface for article persistence and queries.
pub trait ArticleRepository {
    /// Inserts one article row referencing an existing author.
    fn insert_article(&self, article: &Article) -> RepoResult<ArticleId>;
    /// Gets one article with its author's username.
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<ArticleView>>;
    /// Lists all articles, oldest first.
    fn list_articles(&self) -> RepoResult<Vec<ArticleSummary>>;
    /// Deletes one article by id.
    fn delete_article(&self, id: ArticleId) -> RepoResult<()>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "articles", &["id", "title", "text", "author_id"])?;
        Ok(Self { conn })
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn insert_article(&self, article: &Article) -> RepoResult<ArticleId> {
        article.validate()?;

        self.conn.execute(
            "INSERT INTO articles (id, title, text, author_id)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                article.id.to_string(),
                article.title.as_str(),
                article.text.as_str(),
                article.author_id.to_string(),
            ],
        )?;

        Ok(article.id)
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<ArticleView>> {
        let mut stmt = self.conn.prepare(
            "SELECT articles.title, articles.text, authors.username
             FROM articles
             INNER JOIN authors ON authors.id = articles.author_id
             WHERE articles.id = ?1;",
        )?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(ArticleView {
                title: row.get("title")?,
                text: row.get("text")?,
                author_username: row.get("username")?,
            }));
        }

        Ok(None)
    }

    fn list_articles(&self) -> RepoResult<Vec<ArticleSummary>> {
        // rowid order is insertion order for this insert-only table.
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM articles ORDER BY rowid ASC;")?;

        let mut rows = stmt.query([])?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            articles.push(ArticleSummary {
                id: parse_stored_uuid(&id_text, "articles.id")?,
                title: row.get("title")?,
            });
        }

        Ok(articles)
    }

    fn delete_article(&self, id: ArticleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM articles WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}
