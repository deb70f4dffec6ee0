#![allow(dead_code)]

use academia::build_state;
use academia::config::AppConfig;
use academia::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

pub async fn builtin_state() -> AppState {
    let config = AppConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        catalog_path: None,
    };
    build_state(&config).await.expect("Failed to build state")
}

pub async fn app() -> Router {
    academia::routes::router(builtin_state().await)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).expect("body is not utf-8"))
}
