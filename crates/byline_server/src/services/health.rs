//! Liveness probe endpoint.

use actix_web::{web, HttpResponse, Scope};
use serde_json::json;

const API_PATH: &str = "/health";

/// Configures the Actix scope for the health probe.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH).route("", web::get().to(process))
}

pub async fn process() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": byline_core::core_version()
    }))
}
