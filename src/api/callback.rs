use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{render, server::AppState, success, warning};

/// Completes the OAuth flow after the provider redirects back.
///
/// Exchanges the `code` query parameter for an access/refresh token pair,
/// stores the pair for the rest of the session, and renders the search
/// page. A missing code or a rejected exchange answers 400 with a plain
/// text message and stores nothing.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Response {
    let Some(code) = params.get("code") else {
        warning!("Callback hit without an authorization code");
        return (StatusCode::BAD_REQUEST, "Authentication failed").into_response();
    };

    match state.api.exchange_code(code).await {
        Ok(token) => {
            state.tokens.set_tokens(token).await;
            success!("Authentication successful");
            Html(render::search_page()).into_response()
        }
        Err(e) => {
            warning!("Authorization code exchange failed: {}", e);
            (StatusCode::BAD_REQUEST, "Authentication failed").into_response()
        }
    }
}
