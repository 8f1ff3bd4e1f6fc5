use reqwest::Client;

use crate::{
    config,
    types::{SearchTracksResponse, Track},
};

/// Searches the Spotify catalog for tracks matching a query.
///
/// Calls the Web API `/search` endpoint with `type=track`. The query is
/// passed through unvalidated; an empty query is rejected by the provider
/// and surfaces as an error string like any other failure.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Free-text search string
/// * `limit` - Maximum number of tracks to request (1-50)
///
/// # Errors
///
/// Network failures, non-success status codes, and malformed response
/// bodies are all returned as strings.
pub async fn search_tracks(token: &str, query: &str, limit: usize) -> Result<Vec<Track>, String> {
    let client = Client::new();
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let response = client
        .get(&api_url)
        .query(&[
            ("type", "track"),
            ("q", query),
            ("limit", &limit.to_string()),
        ])
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let res = response
        .json::<SearchTracksResponse>()
        .await
        .map_err(|e| e.to_string())?;

    Ok(res.tracks.items)
}

/// Appends a track to the user's active playback queue.
///
/// Calls the Web API `/me/player/queue` endpoint. Spotify answers with an
/// empty body on success and with an error payload when there is no active
/// device or the URI is unknown; only the status code matters here.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `uri` - Track URI to enqueue, e.g. `spotify:track:4iV5W9uYEdYUVa79Axb7Rh`
///
/// # Errors
///
/// Network failures and non-success status codes are returned as strings.
pub async fn add_to_queue(token: &str, uri: &str) -> Result<(), String> {
    let client = Client::new();
    let api_url = format!("{uri}/me/player/queue", uri = &config::spotify_apiurl());

    client
        .post(&api_url)
        .query(&[("uri", uri)])
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    Ok(())
}
