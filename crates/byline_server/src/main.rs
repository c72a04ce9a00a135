//! byline HTTP server entry point.

use actix_web::{web, App, HttpServer};
use byline_server::config::ServerConfig;
use byline_server::services;
use byline_server::state::AppState;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env().map_err(io_invalid)?;
    byline_core::init_logging(&config.log_level, &config.log_dir).map_err(io_invalid)?;
    let state = AppState::from_config(config).map_err(io_invalid)?;

    let bind_addr = (state.config.host.clone(), state.config.port);
    info!(
        "event=server_start module=http status=ok host={} port={} db_path={} email_domain={}",
        state.config.host,
        state.config.port,
        state.config.db_path.display(),
        state.email_policy.domain()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(json_config())
            .app_data(web::Data::new(state.clone()))
            .service(services::health::configure_routes())
            .service(services::articles::configure_routes())
            .default_service(web::route().to(services::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let response = actix_web::HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": err.to_string() }));
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

fn io_invalid(message: impl ToString) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message.to_string())
}
