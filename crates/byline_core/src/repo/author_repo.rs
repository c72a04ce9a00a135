//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist author rows and look them up by derived username.
//!
//! # Invariants
//! - `insert_author` validates before the SQL mutation.
//! - Username uniqueness is enforced by the schema, not by a
//!   read-before-write check; callers receive `UniqueViolation` and
//!   decide how to recover.

use crate::model::author::{Author, AuthorId};
use crate::repo::{ensure_connection_ready, parse_stored_uuid, RepoResult};
use rusqlite::{params, Connection, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT id, firstname, lastname, username FROM authors";

/// Repository interface for author persistence.
pub trait AuthorRepository {
    /// Inserts one author row.
    fn insert_author(&self, author: &Author) -> RepoResult<AuthorId>;
    /// Finds an author by exact username.
    fn find_by_username(&self, username: &str) -> RepoResult<Option<Author>>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "authors", &["id", "firstname", "lastname", "username"])?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn insert_author(&self, author: &Author) -> RepoResult<AuthorId> {
        author.validate()?;

        self.conn.execute(
            "INSERT INTO authors (id, firstname, lastname, username)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                author.id.to_string(),
                author.firstname.as_str(),
                author.lastname.as_str(),
                author.username.as_str(),
            ],
        )?;

        Ok(author.id)
    }

    fn find_by_username(&self, username: &str) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE username = ?1;"))?;

        let mut rows = stmt.query([username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    let id_text: String = row.get("id")?;
    let author = Author::with_id(
        parse_stored_uuid(&id_text, "authors.id")?,
        row.get::<_, String>("firstname")?,
        row.get::<_, String>("lastname")?,
        row.get::<_, String>("username")?,
    );
    author.validate()?;
    Ok(author)
}
