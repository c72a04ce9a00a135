use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use byline_server::config::ServerConfig;
use byline_server::services;
use byline_server::state::AppState;
use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;

fn test_state(dir: &Path) -> AppState {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_path: dir.join("api.db"),
        busy_timeout: Duration::from_secs(5),
        email_domain: "bbc.co.uk".to_string(),
        log_dir: dir.join("logs"),
        log_level: "info".to_string(),
    };
    AppState::from_config(config).unwrap()
}

macro_rules! spawn_app {
    ($dir:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state($dir)))
                .service(services::health::configure_routes())
                .service(services::articles::configure_routes())
                .default_service(web::route().to(services::not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn health_probe_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn list_articles_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::get().uri("/articles").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn create_article_json_then_fetch_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/articles")
        .set_json(json!({
            "title": "Bikes are awesome",
            "text": "This is my article",
            "created_by": "yavor.atanasov@bbc.co.uk"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Okay" }));

    let req = test::TestRequest::get().uri("/articles").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "Bikes are awesome");

    let id = listed[0]["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::get()
        .uri(&format!("/articles/{id}"))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        detail,
        json!({
            "title": "Bikes are awesome",
            "text": "This is my article",
            "author_username": "yavor_atanasov"
        })
    );
}

#[actix_web::test]
async fn create_article_accepts_form_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/articles")
        .set_form([
            ("title", "Bikes are awesome"),
            ("text", "This is my article"),
            ("email", "yavor.atanasov@bbc.co.uk"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/articles").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn create_article_rejects_invalid_email() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/articles")
        .set_json(json!({
            "title": "Bikes are awesome",
            "text": "This is my article",
            "created_by": "yavor.atanasov@gmail.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("invalid email address"));

    let req = test::TestRequest::get().uri("/articles").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn create_article_rejects_missing_title() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/articles")
        .set_json(json!({
            "text": "This is my article",
            "created_by": "yavor.atanasov@bbc.co.uk"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("title"));

    let req = test::TestRequest::get().uri("/articles").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn unknown_article_and_malformed_id_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    for uri in [
        "/articles/e6412fa2-ac6b-4a97-984a-2add7a0920fb",
        "/articles/not-a-uuid",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri {uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "this article cannot be found");
    }
}

#[actix_web::test]
async fn delete_article_then_fetch_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/articles")
        .set_json(json!({
            "title": "A Title",
            "text": "Some text",
            "created_by": "laura.miller@bbc.co.uk"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/articles").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let id = listed[0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/articles/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/articles/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/articles/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = spawn_app!(dir.path());

    let req = test::TestRequest::get().uri("/non-existent").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
