//! # Spotify Integration Module
//!
//! This module provides the relay's interface to the Spotify Web API. It
//! implements the application-level authentication flow and the track
//! search used by the front-end, handling all HTTP communication with the
//! provider.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 client-credentials flow:
//! - **Token Exchange**: Posts the configured client id and secret,
//!   base64-encoded in a Basic authorization header, to the token
//!   endpoint with a form-encoded `grant_type=client_credentials` body
//! - **No User Context**: The relay authenticates as an application;
//!   there is no user authorization step and no refresh token
//!
//! ### Search Module
//!
//! [`search`] - Handles catalog search operations:
//! - **Track Search**: Forwards a caller-supplied text query to the
//!   provider's search endpoint, restricted to track results and capped
//!   at 10 items
//! - **Opaque Results**: Matching tracks are returned exactly as the
//!   provider shaped them; no field is interpreted or validated
//!
//! ## Error Handling Philosophy
//!
//! Every function returns `Result<_, reqwest::Error>`. Transport
//! failures, provider-side errors, and non-success statuses all surface
//! as that one error kind; callers map it to a single generic
//! upstream-error response. There are no retries.
//!
//! ## Configuration Integration
//!
//! The module integrates with the application's configuration system for:
//! - **API Endpoints**: Base URLs for the Web API and the token endpoint
//! - **Authentication**: Client ID and client secret
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - Client-credentials token exchange
//! - `GET /search` - Track search with `q`, `type=track`, `limit=10`

pub mod auth;
pub mod search;
