use std::sync::Once;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use jamrelay::{
    management::TokenManager,
    server::{self, AppState},
    store::PlaylistStore,
};
use tower::ServiceExt;

static INIT: Once = Once::new();

fn init_env() {
    INIT.call_once(|| {
        // SAFETY: runs once, before any test in this binary reads the
        // environment through the router layers
        unsafe {
            std::env::set_var("FRONTEND_URL", "https://playlist.example");
        }
    });
}

// The router is built with a lazily connecting store; none of these
// requests reaches a handler that performs I/O.
async fn test_app() -> Router {
    init_env();

    let store = PlaylistStore::connect("mongodb://127.0.0.1:27017", "jamrelay-test")
        .await
        .expect("well-formed store uri");

    server::app(AppState {
        tokens: TokenManager::new(),
        store,
    })
}

#[tokio::test]
async fn test_unlisted_origin_is_rejected_before_handlers() {
    let app = test_app().await;

    // /health unconditionally succeeds, so a 403 here proves the guard
    // ran first
    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_listed_origin_passes_and_gets_cors_headers() {
    let app = test_app().await;

    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://playlist.example")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://playlist.example")
    );
}

#[tokio::test]
async fn test_local_dev_origin_is_always_listed() {
    let app = test_app().await;

    let request = Request::builder()
        .uri("/health")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_without_origin_passes() {
    let app = test_app().await;

    // Server-to-server and curl requests carry no Origin header
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_without_query_maps_to_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .uri("/search")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_song_with_missing_fields_maps_to_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/update-song")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"songId": "abc"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_song_without_song_maps_to_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/add-song")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"nickname": "x"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
