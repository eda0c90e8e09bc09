use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{spotify, types::Token};

/// Process-wide cache for the Spotify application token.
///
/// The token is written once by `acquire` at startup and read by every
/// search request afterwards. Cloning the manager shares the same
/// underlying slot.
#[derive(Clone)]
pub struct TokenManager {
    token: Arc<RwLock<Option<Token>>>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager {
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_token(token: Token) -> Self {
        TokenManager {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Exchanges the configured client credentials and caches the result.
    /// On failure the previously cached token, if any, stays in place.
    pub async fn acquire(&self) -> Result<(), String> {
        let token = spotify::auth::exchange_client_credentials()
            .await
            .map_err(|e| e.to_string())?;

        let mut lock = self.token.write().await;
        *lock = Some(token);
        Ok(())
    }

    pub async fn current_token(&self) -> Option<String> {
        let lock = self.token.read().await;
        lock.as_ref().map(|t| t.access_token.clone())
    }

    /// A missing token counts as expired. The window is shortened by four
    /// minutes so a token on the verge of expiry is already reported stale.
    pub async fn is_expired(&self) -> bool {
        let lock = self.token.read().await;
        match lock.as_ref() {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= token.obtained_at + token.expires_in - 240
            }
            None => true,
        }
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}
