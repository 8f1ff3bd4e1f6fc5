use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Permissions requested during authorization. Reading playback state and
/// modifying it are enough for search-and-queue; nothing else is asked for.
const SCOPES: [&str; 3] = [
    "user-read-playback-state",
    "user-modify-playback-state",
    "user-read-currently-playing",
];

/// Opaque `state` value echoed back by the provider on `/callback`.
// TODO: a per-request random state would close the CSRF gap; the fixed
// string mirrors the current single-user deployment.
const AUTH_STATE: &str = "noizee-state";

/// Constructs the authorization URL for the consent page.
///
/// Builds the provider's `/authorize` URL with the client ID, the
/// registered redirect URI, the fixed scope set, and the opaque state
/// string. The `/login` route issues a redirect to this URL.
///
/// # Example
///
/// ```
/// let url = build_authorize_url();
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn build_authorize_url() -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = SCOPES.join("%20"),
        state = AUTH_STATE,
    )
}

/// Exchanges an authorization code for an access token pair.
///
/// Completes the OAuth 2.0 authorization-code flow by posting the code
/// received on `/callback` to the token endpoint, authenticated with the
/// client ID and secret via HTTP Basic credentials.
///
/// # Arguments
///
/// * `code` - One-time authorization code received from the OAuth callback
///
/// # Errors
///
/// Returns an error string when the request fails, the response is not
/// JSON, or the provider rejects the code (invalid, expired, or already
/// used), in which case the provider's error payload is included.
pub async fn exchange_code(code: &str) -> Result<Token, String> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    token_from_json(&json)
}

/// Refreshes an expired access token using a refresh token.
///
/// Exchanges a refresh token for a new access token so the application can
/// keep calling the API without sending the user through consent again.
/// The provider may omit a new refresh token from the response; the caller
/// is expected to keep the old one in that case.
///
/// # Arguments
///
/// * `refresh_token` - Valid refresh token obtained from a previous exchange
///
/// # Errors
///
/// Common failures are network errors, a revoked or malformed refresh
/// token, and provider service errors; all are returned as strings.
pub async fn refresh_access_token(refresh_token: &str) -> Result<Token, String> {
    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    token_from_json(&json)
}

/// Builds a [`Token`] from a token-endpoint response body.
///
/// A response without an `access_token` field is an error response and is
/// surfaced verbatim. `refresh_token` and `scope` are optional; refresh
/// responses routinely omit them.
fn token_from_json(json: &Value) -> Result<Token, String> {
    let Some(access_token) = json["access_token"].as_str() else {
        return Err(format!("token endpoint rejected the request: {}", json));
    };

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
