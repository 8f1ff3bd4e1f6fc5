use axum::{
    Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::server::AppState;

/// Starts the OAuth flow by redirecting to the provider's consent page.
///
/// Issues a plain 302 with the authorization URL in the `Location`
/// header; the provider sends the browser back to `/callback` once the
/// user has consented.
pub async fn login(Extension(state): Extension<AppState>) -> Response {
    let url = state.api.authorize_url();
    (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
}
