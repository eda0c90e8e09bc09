use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// One persisted playlist document. The stored `_id` is never read back;
/// `song.id` inside the opaque song value is the external lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub song: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    // Absent on freshly added documents; created by the first append.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nicknames: Option<Vec<String>>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddSongRequest {
    pub song: Option<Value>,
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSongRequest {
    #[serde(rename = "songId")]
    pub song_id: Option<String>,
    #[serde(rename = "newNickname")]
    pub new_nickname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksPage,
}

/// Track objects are provider-defined and passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    Updated,
    NotFound,
}
