use tokio::sync::Mutex;

use crate::{info, spotify::SpotifyApi, types::Token, warning};

/// In-memory store for the session's OAuth token pair.
///
/// Holds at most one token pair per process, created when `/callback`
/// succeeds and discarded on process exit. Tokens are never written to
/// disk. Concurrent handlers share the store through the application
/// state; the mutex keeps overwrites whole, nothing more.
pub struct TokenStore {
    token: Mutex<Option<Token>>,
}

impl TokenStore {
    pub fn new() -> Self {
        TokenStore {
            token: Mutex::new(None),
        }
    }

    /// Replaces the stored token pair with the one from a code exchange.
    pub async fn set_tokens(&self, token: Token) {
        let mut guard = self.token.lock().await;
        *guard = Some(token);
    }

    /// Returns the current access token, or `None` before authentication.
    pub async fn access_token(&self) -> Option<String> {
        let guard = self.token.lock().await;
        guard.as_ref().map(|t| t.access_token.clone())
    }

    /// Refreshes the access token ahead of an authenticated call.
    ///
    /// The refresh is unconditional: no expiry bookkeeping is kept, every
    /// authenticated handler attempts exactly one refresh before its
    /// provider call. Before authentication there is no refresh token and
    /// the attempt short-circuits. On failure the previous token stays in
    /// place and the call proceeds with it; the provider may then reject
    /// it with an authorization error, which the handler renders like any
    /// other failure.
    ///
    /// The provider may omit a new refresh token from the response, in
    /// which case the stored one is retained.
    pub async fn refresh(&self, api: &dyn SpotifyApi) {
        let refresh_token = {
            let guard = self.token.lock().await;
            guard.as_ref().map(|t| t.refresh_token.clone())
        };

        let Some(refresh_token) = refresh_token else {
            return;
        };

        match api.refresh_access_token(&refresh_token).await {
            Ok(fresh) => {
                let mut guard = self.token.lock().await;
                if let Some(stored) = guard.as_mut() {
                    stored.access_token = fresh.access_token;
                    stored.expires_in = fresh.expires_in;
                    stored.obtained_at = fresh.obtained_at;
                    if !fresh.refresh_token.is_empty() {
                        stored.refresh_token = fresh.refresh_token;
                    }
                }
                info!("Access token refreshed");
            }
            Err(e) => {
                warning!("Token refresh failed: {}", e);
            }
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
