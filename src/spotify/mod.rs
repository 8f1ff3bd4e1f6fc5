//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! request handlers: the OAuth 2.0 authorization-code flow and the two
//! catalog/playback operations the front-end needs (track search and
//! queue add). It abstracts away HTTP requests, form encoding, and JSON
//! parsing, presenting a small trait the rest of the application works
//! against.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!        ↓
//! SpotifyApi trait ── WebApi (real implementation)
//!        ↓
//! auth (authorize URL, code exchange, refresh)
//! tracks (search, queue add)
//!        ↓
//! HTTP layer (reqwest, JSON)
//! ```
//!
//! ## Authentication strategy
//!
//! The module implements the OAuth 2.0 authorization-code flow with a
//! client secret: the user consents in the browser, Spotify redirects back
//! with a one-time code, and [`auth::exchange_code`] trades it for an
//! access/refresh token pair. Token-endpoint requests authenticate with
//! HTTP Basic client credentials. Refreshes reuse the stored refresh token
//! via [`auth::refresh_access_token`].
//!
//! ## Error handling
//!
//! All fallible operations return `Result<_, String>` with the underlying
//! `reqwest` or provider error stringified. Callers decide whether a
//! failure is terminal for the request (code exchange) or rendered as a
//! user-facing message (search, queue add).

use async_trait::async_trait;

use crate::types::{Token, Track};

pub mod auth;
pub mod tracks;

/// Operations the request handlers need from the music provider.
///
/// Abstracting the provider behind a trait keeps the handlers testable
/// with a stub implementation and keeps every external call in one place.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Builds the consent-page URL the `/login` route redirects to.
    fn authorize_url(&self) -> String;

    /// Exchanges a one-time authorization code for a token pair.
    async fn exchange_code(&self, code: &str) -> Result<Token, String>;

    /// Obtains a fresh access token from a refresh token.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<Token, String>;

    /// Searches the catalog for tracks matching a free-text query.
    async fn search_tracks(
        &self,
        token: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, String>;

    /// Appends a track to the user's playback queue.
    async fn add_to_queue(&self, token: &str, uri: &str) -> Result<(), String>;
}

/// The real Spotify Web API client.
pub struct WebApi;

impl WebApi {
    pub fn new() -> Self {
        WebApi
    }
}

impl Default for WebApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpotifyApi for WebApi {
    fn authorize_url(&self) -> String {
        auth::build_authorize_url()
    }

    async fn exchange_code(&self, code: &str) -> Result<Token, String> {
        auth::exchange_code(code).await
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<Token, String> {
        auth::refresh_access_token(refresh_token).await
    }

    async fn search_tracks(
        &self,
        token: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Track>, String> {
        tracks::search_tracks(token, query, limit).await
    }

    async fn add_to_queue(&self, token: &str, uri: &str) -> Result<(), String> {
        tracks::add_to_queue(token, uri).await
    }
}
