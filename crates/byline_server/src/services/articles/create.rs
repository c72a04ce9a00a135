//! Article creation endpoint.
//!
//! Composes the two core workflows per request: the Identity Resolver
//! turns the submitted email into a persisted author, then the Article
//! Writer inserts the article row. Both run on one connection inside
//! the blocking pool.

use crate::services::{blocking_failure_response, error_response};
use crate::state::AppState;
use actix_web::web::{self, Form, Json};
use actix_web::{Either, HttpResponse};
use byline_core::db::open_db;
use byline_core::{
    Article, ArticleService, BlogResult, IdentityService, SqliteArticleRepository,
    SqliteAuthorRepository, ValidationError,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// JSON body for `POST /articles`.
///
/// Fields are optional so absence maps to the validation taxonomy
/// instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct CreateArticleJson {
    title: Option<String>,
    text: Option<String>,
    created_by: Option<String>,
}

/// Url-encoded form body for `POST /articles`.
#[derive(Debug, Deserialize)]
pub struct CreateArticleForm {
    title: Option<String>,
    text: Option<String>,
    email: Option<String>,
}

struct NewArticleInput {
    title: Option<String>,
    text: Option<String>,
    email: Option<String>,
    /// Field name reported when the email is missing; differs between
    /// the JSON and form encodings.
    email_field: &'static str,
}

pub async fn process(
    state: web::Data<AppState>,
    payload: Either<Json<CreateArticleJson>, Form<CreateArticleForm>>,
) -> HttpResponse {
    let input = match payload {
        Either::Left(body) => {
            let body = body.into_inner();
            NewArticleInput {
                title: body.title,
                text: body.text,
                email: body.created_by,
                email_field: "created_by",
            }
        }
        Either::Right(body) => {
            let body = body.into_inner();
            NewArticleInput {
                title: body.title,
                text: body.text,
                email: body.email,
                email_field: "email",
            }
        }
    };

    let state = state.into_inner();
    let outcome = web::block(move || create_article(&state, input)).await;

    match outcome {
        Ok(Ok(_article)) => HttpResponse::Created().json(json!({ "message": "Okay" })),
        Ok(Err(err)) => error_response(&err),
        Err(err) => blocking_failure_response(&err),
    }
}

fn create_article(state: &Arc<AppState>, input: NewArticleInput) -> BlogResult<Article> {
    let title = require_field(input.title, "title")?;
    let text = require_field(input.text, "text")?;
    let email = require_field(input.email, input.email_field)?;

    let conn = open_db(&state.config.db_path, state.config.busy_timeout)?;

    let identity = IdentityService::new(
        SqliteAuthorRepository::try_new(&conn)?,
        state.email_policy.clone(),
    );
    let author = identity.resolve_author(&email)?;

    let articles = ArticleService::new(SqliteArticleRepository::try_new(&conn)?);
    articles.create_article(&title, &text, &author)
}

fn require_field(value: Option<String>, field: &'static str) -> BlogResult<String> {
    value
        .ok_or(ValidationError::MissingField(field))
        .map_err(Into::into)
}
