use std::{net::SocketAddr, str::FromStr};

use axum::{
    Extension, Router,
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{api, config, error, management::TokenManager, store::PlaylistStore, utils};

#[derive(Clone)]
pub struct AppState {
    pub tokens: TokenManager,
    pub store: PlaylistStore,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/search", get(api::search))
        .route("/added-songs", get(api::added_songs))
        .route("/update-song", post(api::update_song))
        .route("/add-song", post(api::add_song))
        .layer(Extension(state))
        .layer(middleware::from_fn(origin_guard))
        .layer(cors_layer())
}

pub async fn start_api_server(state: AppState) {
    let app = app(state);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

// Browsers only enforce CORS on their side; the guard also rejects
// cross-origin requests on the server, before any handler runs.
async fn origin_guard(request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());

    if !utils::origin_allowed(origin, &config::allowed_origins()) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Not allowed by CORS" })),
        )
            .into_response();
    }

    next.run(request).await
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::allowed_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
