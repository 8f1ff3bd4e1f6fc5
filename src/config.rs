//! Configuration management for the Noizee web front-end.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and an optional `.env` file in the working
//! directory. It provides a centralized way to manage application
//! configuration including Spotify API credentials, the local server
//! address, and the provider endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::env;

/// Environment variables that must be present before the server starts.
const REQUIRED_VARS: [&str; 3] = [
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIFY_REDIRECT_URI",
];

/// Loads environment variables and verifies the required credentials.
///
/// Reads an optional `.env` file from the working directory (already-set
/// environment variables win), then checks that every variable the
/// application cannot run without is present. Called once at startup so
/// that missing credentials fail fast instead of surfacing as a broken
/// OAuth flow later.
///
/// # Errors
///
/// Returns an error string naming every missing required variable.
///
/// # Example
///
/// ```
/// use noizee::config;
///
/// if let Err(e) = config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Result<(), String> {
    dotenv::dotenv().ok();

    let missing: Vec<&str> = REQUIRED_VARS
        .iter()
        .filter(|var| env::var(var).is_err())
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("missing environment variables: {}", missing.join(", ")))
    }
}

/// Returns the address and port the local HTTP server binds to.
///
/// Defaults to `127.0.0.1:3001` when `SERVER_ADDRESS` is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| String::from("127.0.0.1:3001"))
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set;
/// [`load_env`] verifies it at startup.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// The secret authenticates the token-exchange and token-refresh requests
/// of the authorization-code flow. It should be kept confidential and never
/// exposed in logs or version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set;
/// [`load_env`] verifies it at startup.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// This must match the redirect URI registered in the Spotify application
/// settings and must point at this server's `/callback` route.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set;
/// [`load_env`] verifies it at startup.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Defaults to Spotify's production consent endpoint; `SPOTIFY_AUTH_URL`
/// overrides it, which keeps the flow pointable at a stub provider.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| String::from("https://accounts.spotify.com/authorize"))
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Defaults to Spotify's production token endpoint; `SPOTIFY_TOKEN_URL`
/// overrides it.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| String::from("https://accounts.spotify.com/api/token"))
}

/// Returns the Spotify Web API base URL.
///
/// Defaults to Spotify's production API; `SPOTIFY_API_URL` overrides it.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| String::from("https://api.spotify.com/v1"))
}
