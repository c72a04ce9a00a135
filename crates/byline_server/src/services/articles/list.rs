//! Article list endpoint.

use crate::services::{blocking_failure_response, error_response};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use byline_core::db::open_db;
use byline_core::{ArticleService, SqliteArticleRepository};

pub async fn process(state: web::Data<AppState>) -> HttpResponse {
    let state = state.into_inner();
    let outcome = web::block(move || {
        let conn = open_db(&state.config.db_path, state.config.busy_timeout)?;
        ArticleService::new(SqliteArticleRepository::try_new(&conn)?).list_articles()
    })
    .await;

    match outcome {
        Ok(Ok(articles)) => HttpResponse::Ok().json(articles),
        Ok(Err(err)) => error_response(&err),
        Err(err) => blocking_failure_response(&err),
    }
}
