//! Article deletion endpoint.

use crate::services::articles::parse_article_id;
use crate::services::{article_not_found_response, blocking_failure_response, error_response};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use byline_core::db::open_db;
use byline_core::{ArticleService, SqliteArticleRepository};

pub async fn process(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_article_id(&path) else {
        return article_not_found_response();
    };

    let state = state.into_inner();
    let outcome = web::block(move || {
        let conn = open_db(&state.config.db_path, state.config.busy_timeout)?;
        ArticleService::new(SqliteArticleRepository::try_new(&conn)?).delete_article(id)
    })
    .await;

    match outcome {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(err)) => error_response(&err),
        Err(err) => blocking_failure_response(&err),
    }
}
