use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{Client, Collection, bson::doc};
use serde_json::Value;

use crate::types::{AppendOutcome, PlaylistEntry};

const PLAYLIST_COLLECTION: &str = "playlist";

/// Gateway to the playlist document collection.
///
/// All three operations are single round trips; the store's own
/// concurrency control is the only coordination. Cloning is cheap and
/// shares the underlying connection pool.
#[derive(Clone)]
pub struct PlaylistStore {
    collection: Collection<PlaylistEntry>,
}

impl PlaylistStore {
    /// Connects to the document store and binds the playlist collection.
    ///
    /// The driver connects lazily, so this succeeds for any well-formed
    /// URI; an unreachable store surfaces on the first operation instead.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client
            .database(database)
            .collection::<PlaylistEntry>(PLAYLIST_COLLECTION);

        Ok(PlaylistStore { collection })
    }

    /// Reads every playlist document, in store-defined order.
    pub async fn list_all(&self) -> Result<Vec<PlaylistEntry>, mongodb::error::Error> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await
    }

    /// Inserts one new playlist document.
    ///
    /// The document carries the opaque song value, the optional first
    /// nickname, and the creation timestamp in milliseconds. No
    /// `nicknames` array is written; the field stays absent until the
    /// first append targets the document.
    pub async fn add(
        &self,
        song: Value,
        nickname: Option<String>,
    ) -> Result<(), mongodb::error::Error> {
        let entry = PlaylistEntry {
            song,
            nickname,
            nicknames: None,
            timestamp: Utc::now().timestamp_millis(),
        };

        self.collection.insert_one(entry).await?;
        Ok(())
    }

    /// Appends a nickname to the first document whose embedded `song.id`
    /// matches.
    ///
    /// Uses the store's atomic `$push` so the append cannot lose a
    /// concurrent update; order is preserved and duplicates are kept.
    /// Matching zero documents is the distinct `NotFound` outcome, not an
    /// error.
    pub async fn append_nickname(
        &self,
        song_id: &str,
        new_nickname: &str,
    ) -> Result<AppendOutcome, mongodb::error::Error> {
        let result = self
            .collection
            .update_one(
                doc! { "song.id": song_id },
                doc! { "$push": { "nicknames": new_nickname } },
            )
            .await?;

        if result.matched_count == 0 {
            return Ok(AppendOutcome::NotFound);
        }

        Ok(AppendOutcome::Updated)
    }
}
