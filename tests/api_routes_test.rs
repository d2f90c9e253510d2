use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use hls_resolver::{
    config::Config,
    upstream,
    web::{AppState, WebServer},
};

fn test_app() -> Router {
    let config = Config::default();
    let upstream = upstream::Client::new(&config.upstream).unwrap();
    WebServer::create_router(AppState { config, upstream })
}

// Helper function to send requests to the app
async fn send_request(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();

    let (status, response) = send_request(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["service"], "hls-resolver");
}

#[tokio::test]
async fn test_index_endpoint() {
    let app = test_app();

    let (status, response) = send_request(&app, Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.get("message").is_some());
}

#[tokio::test]
async fn test_video_endpoint_requires_id_or_url() {
    let app = test_app();

    let (status, response) = send_request(&app, Method::GET, "/api/video").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Missing id or url query param");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app();

    let (status, _) = send_request(&app, Method::GET, "/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
