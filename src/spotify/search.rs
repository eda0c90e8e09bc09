use reqwest::Client;
use serde_json::Value;

use crate::{config, types::SearchResponse};

/// Searches the Spotify catalog for tracks matching a text query.
///
/// Issues a search request restricted to track results and capped at 10
/// items, authorized with the given bearer token. The matching track
/// objects are returned exactly as the provider shaped them; the relay
/// interprets none of their fields.
///
/// # Arguments
///
/// * `query` - Free-text search query supplied by the caller
/// * `token` - Access token from the process-wide credential cache
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Value>)` - The provider's list of matching track objects
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Error Handling
///
/// Non-success statuses (including 401 from a stale token and 429 from
/// rate limiting) are converted to errors via `error_for_status`; the
/// caller does not distinguish between them.
///
/// # Example
///
/// ```
/// let tracks = search_tracks("daft punk", &token).await?;
/// println!("Found {} tracks", tracks.len());
/// ```
pub async fn search_tracks(query: &str, token: &str) -> Result<Vec<Value>, reqwest::Error> {
    let client = Client::new();
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let response = client
        .get(&api_url)
        .query(&[("q", query), ("type", "track"), ("limit", "10")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<SearchResponse>().await?;

    Ok(json.tracks.items)
}
