use jamrelay::types::{PlaylistEntry, SearchResponse, Token};
use serde_json::json;

// Helper function to create a freshly added entry, the way the add
// operation builds one
fn create_fresh_entry(nickname: Option<&str>) -> PlaylistEntry {
    PlaylistEntry {
        song: json!({"id": "abc", "name": "Song"}),
        nickname: nickname.map(|n| n.to_string()),
        nicknames: None,
        timestamp: 1_700_000_000_000,
    }
}

#[test]
fn test_fresh_entry_omits_nicknames() {
    let entry = create_fresh_entry(Some("x"));
    let value = serde_json::to_value(&entry).unwrap();

    // A freshly added document never carries a nicknames array; the field
    // only appears once the first append targets the document
    assert!(value.get("nicknames").is_none());

    // The supplied fields are all there
    assert_eq!(value["song"]["id"], "abc");
    assert_eq!(value["nickname"], "x");
    assert_eq!(value["timestamp"], 1_700_000_000_000i64);
}

#[test]
fn test_fresh_entry_omits_absent_nickname() {
    let entry = create_fresh_entry(None);
    let value = serde_json::to_value(&entry).unwrap();

    // The first nickname is not validated for presence; when the caller
    // omitted it, the stored document omits it too
    assert!(value.get("nickname").is_none());
}

#[test]
fn test_entry_roundtrip_keeps_nickname_order() {
    let stored = json!({
        "song": {"id": "abc"},
        "nickname": "a",
        "nicknames": ["a", "b", "a"],
        "timestamp": 1_700_000_000_000i64
    });

    let entry: PlaylistEntry = serde_json::from_value(stored).unwrap();

    // Order is preserved and duplicates are kept
    assert_eq!(
        entry.nicknames,
        Some(vec!["a".to_string(), "b".to_string(), "a".to_string()])
    );
}

#[test]
fn test_entry_ignores_store_assigned_id() {
    // Documents read back from the store carry an _id the relay never
    // exposes
    let stored = json!({
        "_id": "656f00000000000000000000",
        "song": {"id": "abc"},
        "timestamp": 0i64
    });

    let entry: PlaylistEntry = serde_json::from_value(stored).unwrap();
    let value = serde_json::to_value(&entry).unwrap();
    assert!(value.get("_id").is_none());
}

#[test]
fn test_search_response_items_stay_opaque() {
    let body = json!({
        "tracks": {
            "items": [
                {"id": "t1", "unknown_provider_field": {"nested": true}},
                {"id": "t2"}
            ],
            "total": 2
        }
    });

    let response: SearchResponse = serde_json::from_value(body).unwrap();

    // Items come back exactly as the provider shaped them
    assert_eq!(response.tracks.items.len(), 2);
    assert_eq!(
        response.tracks.items[0]["unknown_provider_field"]["nested"],
        true
    );
}

#[test]
fn test_token_deserializes_exchange_response() {
    let token: Token = serde_json::from_value(json!({
        "access_token": "BQC123",
        "token_type": "Bearer",
        "expires_in": 3600,
        "obtained_at": 1_700_000_000u64
    }))
    .unwrap();

    assert_eq!(token.access_token, "BQC123");
    assert_eq!(token.expires_in, 3600);
}
