use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::{api, config, error, management::TokenStore, spotify::SpotifyApi};

/// Shared state injected into every handler: the provider client and the
/// session's token store. Cloning is cheap; both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SpotifyApi>,
    pub tokens: Arc<TokenStore>,
}

pub async fn start_api_server(state: AppState) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/search", get(api::search))
        .route("/queue", post(api::queue))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
