use std::sync::Arc;

use noizee::{
    config, error, info,
    management::TokenStore,
    server::{AppState, start_api_server},
    spotify::WebApi,
    warning,
};

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let state = AppState {
        api: Arc::new(WebApi::new()),
        tokens: Arc::new(TokenStore::new()),
    };

    let server = tokio::spawn(start_api_server(state));

    info!("Listening on http://{}", config::server_addr());

    // The registered redirect URI points at /callback on this server; the
    // login page lives next to it.
    let login_url = config::spotify_redirect_uri().replace("/callback", "/login");
    if webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        );
    }

    let _ = server.await;
}
