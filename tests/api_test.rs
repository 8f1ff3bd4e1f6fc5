use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Extension, Form,
    body::to_bytes,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use noizee::{
    api,
    management::TokenStore,
    server::AppState,
    spotify::SpotifyApi,
    types::{AlbumImage, Token, Track, TrackAlbum, TrackArtist},
};

/// Stub provider standing in for the Spotify Web API. Records every call
/// so the tests can assert how often and with what the handlers hit the
/// provider.
struct StubApi {
    refresh_ok: bool,
    queue_ok: bool,
    search_results: Result<Vec<Track>, String>,
    refresh_calls: AtomicUsize,
    refresh_tokens_seen: Mutex<Vec<String>>,
    search_tokens_seen: Mutex<Vec<String>>,
    queued_uris: Mutex<Vec<String>>,
}

impl Default for StubApi {
    fn default() -> Self {
        StubApi {
            refresh_ok: true,
            queue_ok: true,
            search_results: Ok(vec![]),
            refresh_calls: AtomicUsize::new(0),
            refresh_tokens_seen: Mutex::new(vec![]),
            search_tokens_seen: Mutex::new(vec![]),
            queued_uris: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl SpotifyApi for StubApi {
    fn authorize_url(&self) -> String {
        String::from("https://accounts.example.com/authorize?client_id=test&state=test")
    }

    async fn exchange_code(&self, code: &str) -> Result<Token, String> {
        if code == "valid-code" {
            Ok(create_test_token("access-1", "refresh-1"))
        } else {
            Err(String::from("invalid_grant: authorization code expired"))
        }
    }

    async fn refresh_access_token(&self, refresh_token: &str) -> Result<Token, String> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.refresh_tokens_seen
            .lock()
            .unwrap()
            .push(refresh_token.to_string());

        if self.refresh_ok {
            // Spotify refresh responses usually omit the refresh token
            Ok(create_test_token("access-2", ""))
        } else {
            Err(String::from("refresh denied"))
        }
    }

    async fn search_tracks(
        &self,
        token: &str,
        _query: &str,
        _limit: usize,
    ) -> Result<Vec<Track>, String> {
        self.search_tokens_seen.lock().unwrap().push(token.to_string());
        self.search_results.clone()
    }

    async fn add_to_queue(&self, _token: &str, uri: &str) -> Result<(), String> {
        self.queued_uris.lock().unwrap().push(uri.to_string());

        if self.queue_ok {
            Ok(())
        } else {
            Err(String::from("Player command failed: No active device found"))
        }
    }
}

fn create_test_token(access: &str, refresh: &str) -> Token {
    Token {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        scope: String::new(),
        expires_in: 3600,
        obtained_at: 0,
    }
}

fn create_test_track(id: &str, name: &str, artist: &str, image: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        artists: vec![TrackArtist {
            name: artist.to_string(),
        }],
        album: TrackAlbum {
            images: vec![AlbumImage {
                url: image.to_string(),
            }],
        },
    }
}

fn create_state(stub: &Arc<StubApi>) -> AppState {
    let api: Arc<dyn SpotifyApi> = stub.clone();
    AppState {
        api,
        tokens: Arc::new(TokenStore::new()),
    }
}

/// Builds a state whose token store already holds a session token pair,
/// as it would after a successful /callback.
async fn create_authenticated_state(stub: &Arc<StubApi>) -> AppState {
    let state = create_state(stub);
    state
        .tokens
        .set_tokens(create_test_token("access-0", "refresh-0"))
        .await;
    state
}

fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn form(pairs: &[(&str, &str)]) -> Form<HashMap<String, String>> {
    Form(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_login_redirects_to_consent_url() {
    let stub = Arc::new(StubApi::default());
    let state = create_state(&stub);

    let response = api::login(Extension(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://accounts.example.com/authorize?client_id=test&state=test"
    );
}

#[tokio::test]
async fn test_callback_with_valid_code_stores_tokens() {
    let stub = Arc::new(StubApi::default());
    let state = create_state(&stub);

    let response = api::callback(query(&[("code", "valid-code")]), Extension(state.clone()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        state.tokens.access_token().await,
        Some(String::from("access-1"))
    );

    let body = body_text(response).await;
    assert!(body.contains(r#"<form action="/search" method="get""#));
}

#[tokio::test]
async fn test_callback_with_invalid_code_stores_nothing() {
    let stub = Arc::new(StubApi::default());
    let state = create_state(&stub);

    let response = api::callback(query(&[("code", "expired-code")]), Extension(state.clone()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.tokens.access_token().await, None);

    let body = body_text(response).await;
    assert!(body.contains("Authentication failed"));
}

#[tokio::test]
async fn test_callback_without_code_is_rejected() {
    let stub = Arc::new(StubApi::default());
    let state = create_state(&stub);

    let response = api::callback(query(&[]), Extension(state.clone()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.tokens.access_token().await, None);
}

#[tokio::test]
async fn test_search_truncates_to_five_rows() {
    let tracks: Vec<Track> = (1..=7)
        .map(|i| {
            create_test_track(
                &i.to_string(),
                &format!("Track {}", i),
                "Artist",
                "http://img/cover",
            )
        })
        .collect();
    let stub = Arc::new(StubApi {
        search_results: Ok(tracks),
        ..StubApi::default()
    });
    let state = create_authenticated_state(&stub).await;

    let response = api::search(query(&[("q", "track")]), Extension(state))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(body.matches(r#"<div class="track">"#).count(), 5);
}

#[tokio::test]
async fn test_search_renders_all_rows_when_fewer_than_five() {
    let tracks = vec![
        create_test_track("1", "One", "Artist", "http://img/1"),
        create_test_track("2", "Two", "Artist", "http://img/2"),
    ];
    let stub = Arc::new(StubApi {
        search_results: Ok(tracks),
        ..StubApi::default()
    });
    let state = create_authenticated_state(&stub).await;

    let response = api::search(query(&[("q", "track")]), Extension(state))
        .await
        .into_response();

    let body = body_text(response).await;
    assert_eq!(body.matches(r#"<div class="track">"#).count(), 2);
}

#[tokio::test]
async fn test_search_renders_track_fields() {
    let stub = Arc::new(StubApi {
        search_results: Ok(vec![create_test_track(
            "1",
            "Imagine",
            "John Lennon",
            "http://x/img.jpg",
        )]),
        ..StubApi::default()
    });
    let state = create_authenticated_state(&stub).await;

    let response = api::search(query(&[("q", "imagine")]), Extension(state))
        .await
        .into_response();

    let body = body_text(response).await;
    assert!(body.contains(r#"<div class="name">Imagine</div>"#));
    assert!(body.contains(r#"<div class="artist">John Lennon</div>"#));
    assert!(body.contains(r#"<img src="http://x/img.jpg""#));
    assert!(body.contains(r#"<input type="hidden" name="uri" value="spotify:track:1" />"#));
}

#[tokio::test]
async fn test_search_refreshes_token_exactly_once() {
    let stub = Arc::new(StubApi::default());
    let state = create_authenticated_state(&stub).await;

    api::search(query(&[("q", "track")]), Extension(state.clone())).await;

    assert_eq!(stub.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        state.tokens.access_token().await,
        Some(String::from("access-2"))
    );
}

#[tokio::test]
async fn test_search_keeps_previous_token_when_refresh_fails() {
    let stub = Arc::new(StubApi {
        refresh_ok: false,
        ..StubApi::default()
    });
    let state = create_authenticated_state(&stub).await;

    let response = api::search(query(&[("q", "track")]), Extension(state.clone()))
        .await
        .into_response();

    // The stale token stays in place and the search proceeds with it
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        state.tokens.access_token().await,
        Some(String::from("access-0"))
    );
    assert_eq!(
        *stub.search_tokens_seen.lock().unwrap(),
        vec![String::from("access-0")]
    );
}

#[tokio::test]
async fn test_refresh_retains_refresh_token_when_response_omits_it() {
    let stub = Arc::new(StubApi::default());
    let state = create_authenticated_state(&stub).await;

    api::search(query(&[("q", "one")]), Extension(state.clone())).await;
    api::search(query(&[("q", "two")]), Extension(state.clone())).await;

    // The stub's refresh responses carry no refresh token, so both
    // attempts must have used the one from the original exchange
    assert_eq!(
        *stub.refresh_tokens_seen.lock().unwrap(),
        vec![String::from("refresh-0"), String::from("refresh-0")]
    );
}

#[tokio::test]
async fn test_search_failure_renders_message_with_ok_status() {
    let stub = Arc::new(StubApi {
        search_results: Err(String::from("503 Service Unavailable")),
        ..StubApi::default()
    });
    let state = create_authenticated_state(&stub).await;

    let response = api::search(query(&[("q", "track")]), Extension(state))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Could not search for tracks."));
}

#[tokio::test]
async fn test_queue_without_uri_never_calls_provider() {
    let stub = Arc::new(StubApi::default());
    let state = create_authenticated_state(&stub).await;

    let response = api::queue(Extension(state), form(&[]))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(stub.queued_uris.lock().unwrap().is_empty());
    assert_eq!(stub.refresh_calls.load(Ordering::SeqCst), 0);

    let body = body_text(response).await;
    assert!(body.contains("No track URI received."));
}

#[tokio::test]
async fn test_queue_with_empty_uri_never_calls_provider() {
    let stub = Arc::new(StubApi::default());
    let state = create_authenticated_state(&stub).await;

    let response = api::queue(Extension(state), form(&[("uri", "")]))
        .await
        .into_response();

    assert!(stub.queued_uris.lock().unwrap().is_empty());
    let body = body_text(response).await;
    assert!(body.contains("No track URI received."));
}

#[tokio::test]
async fn test_queue_adds_track_exactly_once() {
    let stub = Arc::new(StubApi::default());
    let state = create_authenticated_state(&stub).await;

    let response = api::queue(Extension(state), form(&[("uri", "spotify:track:9")]))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        *stub.queued_uris.lock().unwrap(),
        vec![String::from("spotify:track:9")]
    );
    assert_eq!(stub.refresh_calls.load(Ordering::SeqCst), 1);

    let body = body_text(response).await;
    assert!(body.contains("added to the queue"));
}

#[tokio::test]
async fn test_queue_failure_renders_error_with_ok_status() {
    let stub = Arc::new(StubApi {
        queue_ok: false,
        ..StubApi::default()
    });
    let state = create_authenticated_state(&stub).await;

    let response = api::queue(Extension(state), form(&[("uri", "spotify:track:9")]))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Player command failed: No active device found"));
}
