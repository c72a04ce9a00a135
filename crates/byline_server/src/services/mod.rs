//! HTTP service modules and shared response mapping.
//!
//! Each resource gets its own module with a `configure_routes()`
//! entry; handlers delegate to `byline_core` services and translate
//! the core error taxonomy to status codes here, in one place.

use actix_web::error::BlockingError;
use actix_web::HttpResponse;
use byline_core::BlogError;
use log::{error, warn};
use serde_json::json;

pub mod articles;
pub mod health;

/// Maps a core error to its HTTP response.
///
/// Validation and not-found are caller mistakes; storage failures are
/// server faults and are always logged before answering 500.
pub(crate) fn error_response(err: &BlogError) -> HttpResponse {
    match err {
        BlogError::Validation(inner) => {
            warn!("event=request_rejected module=http status=invalid error={inner}");
            HttpResponse::BadRequest().json(json!({ "error": inner.to_string() }))
        }
        BlogError::NotFound(id) => {
            warn!("event=request_rejected module=http status=not_found id={id}");
            article_not_found_response()
        }
        BlogError::Storage(inner) => {
            error!("event=storage_failure module=http status=error error={inner}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal storage failure" }))
        }
    }
}

pub(crate) fn article_not_found_response() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "this article cannot be found" }))
}

/// The blocking pool rejected or lost the task (e.g. during shutdown).
pub(crate) fn blocking_failure_response(err: &BlockingError) -> HttpResponse {
    error!("event=storage_failure module=http status=error error={err}");
    HttpResponse::InternalServerError().json(json!({ "error": "internal storage failure" }))
}

/// Fallback for routes outside the configured surface.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "not found" }))
}
