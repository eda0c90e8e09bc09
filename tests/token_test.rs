use chrono::Utc;
use jamrelay::{management::TokenManager, types::Token};

// Helper function to create a token obtained at the given offset from now
fn create_token(obtained_secs_ago: i64, expires_in: u64) -> Token {
    Token {
        access_token: "BQC123".to_string(),
        token_type: "Bearer".to_string(),
        expires_in,
        obtained_at: (Utc::now().timestamp() - obtained_secs_ago) as u64,
    }
}

#[tokio::test]
async fn test_empty_manager_is_expired() {
    let manager = TokenManager::new();

    // Before the startup exchange there is nothing to serve with
    assert!(manager.is_expired().await);
    assert_eq!(manager.current_token().await, None);
}

#[tokio::test]
async fn test_fresh_token_is_not_expired() {
    let manager = TokenManager::with_token(create_token(0, 3600));

    assert!(!manager.is_expired().await);
    assert_eq!(manager.current_token().await, Some("BQC123".to_string()));
}

#[tokio::test]
async fn test_stale_token_is_expired() {
    // Obtained one hour ago with a one hour lifetime
    let manager = TokenManager::with_token(create_token(3600, 3600));
    assert!(manager.is_expired().await);
}

#[tokio::test]
async fn test_token_near_expiry_counts_as_expired() {
    // Still two minutes of formal validity left, but inside the four
    // minute early-expiry window
    let manager = TokenManager::with_token(create_token(3480, 3600));
    assert!(manager.is_expired().await);
}
