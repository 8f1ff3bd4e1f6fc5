use std::collections::HashMap;

use axum::{Extension, Form, response::Html};

use crate::{render, server::AppState, warning};

/// Appends the posted track URI to the user's playback queue.
///
/// An absent or empty `uri` field short-circuits to the "no URI" page
/// without touching the provider. Otherwise the access token is refreshed
/// and the queue-add is attempted once; both the confirmation and the
/// error page answer with status 200, embedding the failure text when the
/// provider rejects the call.
pub async fn queue(
    Extension(state): Extension<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> Html<String> {
    let Some(uri) = params.get("uri").filter(|u| !u.is_empty()) else {
        return Html(render::missing_uri());
    };

    state.tokens.refresh(state.api.as_ref()).await;
    let token = state.tokens.access_token().await.unwrap_or_default();

    match state.api.add_to_queue(&token, uri).await {
        Ok(()) => Html(render::queue_confirmation()),
        Err(e) => {
            warning!("Could not add track to queue: {}", e);
            Html(render::queue_error(&e))
        }
    }
}
