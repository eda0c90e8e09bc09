use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Json};
use serde_json::Value;

use crate::{api::ApiError, server::AppState, spotify, warning};

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let query = match params.get("q") {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ApiError::BadRequest("Query is required")),
    };

    if state.tokens.is_expired().await {
        warning!("Spotify token missing or expired; search will likely be rejected upstream");
    }

    let token = state.tokens.current_token().await.unwrap_or_default();

    match spotify::search::search_tracks(query, &token).await {
        Ok(tracks) => Ok(Json(tracks)),
        Err(e) => {
            warning!("Spotify search failed: {}", e);
            Err(ApiError::Internal("Spotify API error"))
        }
    }
}
