use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use std::time::Duration;
use tower::ServiceExt;

use seocheck::{app, app_state::AppState, config::FetchConfig};

pub fn test_app(timeout: Duration) -> Router {
    let config = FetchConfig {
        timeout,
        ..FetchConfig::default()
    };
    app::router(AppState::new(&config).expect("Failed to build test fetcher"))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}
