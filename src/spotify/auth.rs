use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token, utils};

/// Exchanges the configured client credentials for an access token.
///
/// Posts a form-encoded `grant_type=client_credentials` body to the
/// provider's token endpoint. The client id and secret are sent
/// base64-encoded in a Basic authorization header, as the
/// client-credentials grant requires.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh application token with expiration metadata
/// - `Err(reqwest::Error)` - HTTP error, network error, or API error
///
/// # Token Contents
///
/// The returned token includes the access token for API requests, the
/// token type reported by the provider, the expiration time in seconds,
/// and the timestamp the exchange completed. Client-credentials tokens
/// carry no refresh token; a stale token is replaced by calling this
/// function again.
///
/// # Error Conditions
///
/// Common failures include network connectivity issues, invalid client
/// credentials, and provider service errors. Fields missing from a
/// malformed response body fall back to empty or default values rather
/// than failing the exchange.
///
/// # Example
///
/// ```
/// let token = exchange_client_credentials().await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn exchange_client_credentials() -> Result<Token, reqwest::Error> {
    let authorization =
        utils::basic_auth_value(&config::spotify_client_id(), &config::spotify_client_secret());

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header(reqwest::header::AUTHORIZATION, authorization)
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        token_type: json["token_type"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
