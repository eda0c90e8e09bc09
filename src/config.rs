//! Configuration management for the playlist relay.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. It
//! provides a centralized way to manage application configuration including
//! Spotify API credentials, the document store connection, and the HTTP
//! server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::env;

use dotenv;

/// Loads environment variables from a `.env` file in the working directory.
///
/// A deployed relay usually receives its configuration from the process
/// environment; the `.env` file is a convenience for local development. A
/// missing file is therefore not an error and is silently ignored.
///
/// # Example
///
/// ```
/// use jamrelay::config;
///
/// config::load_env();
/// let addr = config::server_addr();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address the HTTP server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port the relay listens on, e.g. `0.0.0.0:5001`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the front-end origin URL.
///
/// Retrieves the `FRONTEND_URL` environment variable which names the
/// deployed front-end origin allowed to call this relay from a browser.
///
/// # Panics
///
/// Panics if the `FRONTEND_URL` environment variable is not set.
pub fn frontend_url() -> String {
    env::var("FRONTEND_URL").expect("FRONTEND_URL must be set")
}

/// Returns the set of origins allowed to call the relay.
///
/// The allow-list consists of the configured front-end origin plus the
/// local development server. Requests that carry an `Origin` header not
/// in this list are rejected; requests without an `Origin` header are
/// always permitted.
///
/// # Example
///
/// ```
/// let origins = allowed_origins(); // e.g. ["https://example.app", "http://localhost:3000"]
/// ```
pub fn allowed_origins() -> Vec<String> {
    vec![frontend_url(), "http://localhost:3000".to_string()]
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform. This is used for the client-credentials
/// token exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints, e.g.
/// `https://api.spotify.com/v1`. This is used for all catalog operations
/// after authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL the relay posts its client credentials to at startup, e.g.
/// `https://accounts.spotify.com/api/token`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Returns the MongoDB connection string.
///
/// Retrieves the `MONGODB_URI` environment variable which contains the
/// connection string for the document store holding the playlist
/// collection.
///
/// # Panics
///
/// Panics if the `MONGODB_URI` environment variable is not set.
pub fn mongodb_uri() -> String {
    env::var("MONGODB_URI").expect("MONGODB_URI must be set")
}

/// Returns the name of the MongoDB database.
///
/// Retrieves the `MONGODB_DATABASE` environment variable naming the
/// database that contains the playlist collection.
///
/// # Panics
///
/// Panics if the `MONGODB_DATABASE` environment variable is not set.
pub fn mongodb_database() -> String {
    env::var("MONGODB_DATABASE").expect("MONGODB_DATABASE must be set")
}
