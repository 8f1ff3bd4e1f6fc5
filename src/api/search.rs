use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{render, server::AppState, types::TrackRow, warning};

/// Result rows kept per search; the provider response is truncated here.
const MAX_RESULTS: usize = 5;

/// Searches the catalog and renders the result list.
///
/// Refreshes the access token first, then queries the provider with the
/// `q` parameter as given (missing or empty queries are passed through and
/// fail provider-side). Any failure is logged and rendered as a message
/// with status 200; search errors are not fatal to the session.
pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Html<String> {
    let query = params.get("q").cloned().unwrap_or_default();

    state.tokens.refresh(state.api.as_ref()).await;
    let token = state.tokens.access_token().await.unwrap_or_default();

    match state.api.search_tracks(&token, &query, MAX_RESULTS).await {
        Ok(tracks) => {
            let rows: Vec<TrackRow> = tracks.iter().take(MAX_RESULTS).map(TrackRow::from).collect();
            Html(render::search_results(&rows))
        }
        Err(e) => {
            warning!("Track search failed: {}", e);
            Html(render::search_error())
        }
    }
}
