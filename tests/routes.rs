use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::Value;
use skin_classifier::configure;
use skin_classifier::handlers::AppState;
use skin_classifier::upload::UploadDir;
use tempfile::TempDir;

mod common;

fn state() -> (web::Data<AppState>, TempDir) {
    let dir = TempDir::new().unwrap();
    let uploads = UploadDir::create(dir.path()).unwrap();
    (web::Data::new(AppState::new(common::peak_at(0, 6), uploads)), dir)
}

#[actix_rt::test]
async fn index_serves_upload_page() {
    let (state, _dir) = state();
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("name=\"file\""));
    assert!(html.contains("/predict"));
}

#[actix_rt::test]
async fn health_reports_ok() {
    let (state, _dir) = state();
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
}

#[actix_rt::test]
async fn predict_only_accepts_post() {
    let (state, _dir) = state();
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/predict").to_request()).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
