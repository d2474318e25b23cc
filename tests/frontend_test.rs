//! Frontend hosting: files of the build are served from `/`, unknown paths
//! fall back to `index.html`, and API routes keep priority.

use actix_web::{App, http::StatusCode, test, web};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use slidedeck::handlers::{self, frontend, frontend::FrontendDist};
use slidedeck::llm::DeckGenerator;
use slidedeck::models::seed;
use slidedeck::store::DeckStore;

const INDEX_HTML: &str = "<!doctype html><p>app shell</p>";

macro_rules! frontend_app {
    ($dist:expr) => {{
        let dist = FrontendDist($dist);
        let files = frontend::static_files(&dist);
        let mut app = App::new()
            .app_data(web::Data::new(DeckStore::in_memory()))
            .app_data(web::Data::new(DeckGenerator::fallback_only()))
            .app_data(web::Data::new(seed::default_deck().expect("default deck")))
            .app_data(web::Data::new(dist))
            .configure(handlers::configure);
        if let Some(files) = files {
            app = app.service(files);
        }
        test::init_service(app.default_service(web::to(frontend::index))).await
    }};
}

macro_rules! get_text {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", $uri);
        let body = test::read_body(resp).await;
        String::from_utf8(body.to_vec()).expect("utf-8")
    }};
}

fn write_build(root: &std::path::Path) -> PathBuf {
    let dist = root.join("dist");
    fs::create_dir_all(dist.join("assets")).expect("mkdir");
    fs::write(dist.join("index.html"), INDEX_HTML).expect("write index");
    fs::write(dist.join("favicon.svg"), "<svg></svg>").expect("write favicon");
    fs::write(dist.join("assets").join("app.js"), "console.log(1);").expect("write js");
    dist
}

#[actix_web::test]
async fn test_build_files_are_served_from_root() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let app = frontend_app!(write_build(dir.path()));

    assert_eq!(get_text!(app, "/favicon.svg"), "<svg></svg>");
    assert_eq!(get_text!(app, "/assets/app.js"), "console.log(1);");
    assert_eq!(get_text!(app, "/"), INDEX_HTML);
}

#[actix_web::test]
async fn test_client_routes_fall_back_to_index() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let app = frontend_app!(write_build(dir.path()));

    assert_eq!(get_text!(app, "/decks/123/edit"), INDEX_HTML);
    assert_eq!(get_text!(app, "/assets/missing.js"), INDEX_HTML);
}

#[actix_web::test]
async fn test_api_routes_take_priority() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let app = frontend_app!(write_build(dir.path()));

    let req = test::TestRequest::get().uri("/api/decks").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.is_array());

    let req = test::TestRequest::post().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["message"], "Not found");
}

#[actix_web::test]
async fn test_missing_build_returns_hint() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let app = frontend_app!(dir.path().join("no-build"));

    let text = get_text!(app, "/anything");
    assert!(text.starts_with("Frontend build not found"));
}
