use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;

pub fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

pub fn origin_allowed(origin: Option<&str>, allowed: &[String]) -> bool {
    match origin {
        // Requests without an Origin header (curl, server-to-server) pass.
        None => true,
        Some(origin) => allowed.iter().any(|a| a == origin),
    }
}

// Presence in the sense of the front-end contract: null, false, zero and
// the empty string all count as missing.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        _ => true,
    }
}

pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
