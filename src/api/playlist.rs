use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::{
    api::ApiError,
    server::AppState,
    types::{AddSongRequest, AppendOutcome, PlaylistEntry, UpdateSongRequest},
    utils, warning,
};

pub async fn added_songs(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<PlaylistEntry>>, ApiError> {
    match state.store.list_all().await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => {
            warning!("Failed to read playlist collection: {}", e);
            Err(ApiError::Internal("Error fetching added songs"))
        }
    }
}

pub async fn add_song(
    Extension(state): Extension<AppState>,
    Json(request): Json<AddSongRequest>,
) -> Result<Json<Value>, ApiError> {
    let song = match request.song {
        Some(song) if utils::is_present(&song) => song,
        _ => return Err(ApiError::BadRequest("Song & nickname required")),
    };

    match state.store.add(song, request.nickname).await {
        Ok(()) => Ok(Json(json!({ "message": "Song added successfully!" }))),
        Err(e) => {
            warning!("Failed to add song: {}", e);
            Err(ApiError::Internal("Error adding song"))
        }
    }
}

pub async fn update_song(
    Extension(state): Extension<AppState>,
    Json(request): Json<UpdateSongRequest>,
) -> Result<Json<Value>, ApiError> {
    let song_id = utils::non_empty(request.song_id);
    let new_nickname = utils::non_empty(request.new_nickname);

    let (Some(song_id), Some(new_nickname)) = (song_id, new_nickname) else {
        return Err(ApiError::BadRequest("Song ID and nickname are required"));
    };

    match state.store.append_nickname(&song_id, &new_nickname).await {
        Ok(AppendOutcome::Updated) => Ok(Json(json!({ "message": "Nickname added successfully!" }))),
        Ok(AppendOutcome::NotFound) => Err(ApiError::NotFound("Song not found")),
        Err(e) => {
            warning!("Failed to update song {}: {}", song_id, e);
            Err(ApiError::Internal("Error updating song"))
        }
    }
}
