//! # API Module
//!
//! This module provides the HTTP endpoints the relay serves to its
//! front-end. It implements the catalog search proxy, the playlist
//! read/write operations, and a health check.
//!
//! ## Endpoints
//!
//! ### Catalog
//!
//! - [`search`] - Forwards a text query to the Spotify track search using
//!   the process-wide cached token and returns the provider's result list
//!   unmodified.
//!
//! ### Playlist
//!
//! - [`added_songs`] - Lists every document in the playlist collection.
//! - [`add_song`] - Appends a new playlist document from the caller's
//!   opaque song value and optional nickname.
//! - [`update_song`] - Appends a nickname to the entry whose embedded
//!   `song.id` matches, atomically in the store.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information for
//!   monitoring systems.
//!
//! ## Error Mapping
//!
//! Handlers validate their inputs and translate component failures into
//! [`ApiError`] values: missing fields map to 400, an unknown song to
//! 404, and any upstream or store fault to a generic 500. Underlying
//! causes are logged server-side and never included in a response body.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web
//! framework. Each endpoint is an async function taking the shared
//! application state through an extension layer, composed into the
//! router by [`crate::server`].

mod error;
mod health;
mod playlist;
mod search;

pub use error::ApiError;
pub use health::health;
pub use playlist::{add_song, added_songs, update_song};
pub use search::search;
