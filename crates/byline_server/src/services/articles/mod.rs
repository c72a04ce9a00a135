//! Article API endpoints.
//!
//! Routes under `/articles`:
//! - `GET ""` — list all articles, oldest first (`list::process`).
//! - `POST ""` — resolve the author from the submitted email and
//!   create one article; accepts a JSON body (`created_by`) or a
//!   url-encoded form (`email`) (`create::process`).
//! - `GET "/{article_id}"` — one article with its author's username
//!   (`get::process`).
//! - `DELETE "/{article_id}"` — delete by id (`delete::process`).

mod create;
mod delete;
mod get;
mod list;

use actix_web::{web, Scope};
use byline_core::ArticleId;
use uuid::Uuid;

const API_PATH: &str = "/articles";

/// Configures the Actix scope for all article routes.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        .route("/{article_id}", web::get().to(get::process))
        .route("/{article_id}", web::delete().to(delete::process))
}

/// Path ids that are not UUIDs cannot name an article; callers get the
/// same 404 as for an unknown id.
pub(crate) fn parse_article_id(raw: &str) -> Option<ArticleId> {
    Uuid::parse_str(raw).ok()
}
