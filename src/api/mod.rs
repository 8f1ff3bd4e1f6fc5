//! # API Module
//!
//! HTTP endpoint handlers for the Noizee web server. Together the four
//! user-facing routes implement the authorization-code OAuth flow and the
//! search-and-queue user flow:
//!
//! - [`login`] - `GET /login` redirects the browser to the provider's
//!   consent page with the application's scopes and state.
//! - [`callback`] - `GET /callback` exchanges the authorization code for a
//!   token pair, stores it, and renders the search page. A failed exchange
//!   answers 400.
//! - [`search`] - `GET /search` refreshes the token, queries the catalog,
//!   and renders up to five result rows. Failures render a message with
//!   status 200.
//! - [`queue`] - `POST /queue` refreshes the token and appends the posted
//!   track URI to the playback queue. Failures render a message with
//!   status 200.
//!
//! [`health`] is a plain status endpoint for monitoring.
//!
//! ## Error handling
//!
//! Provider failures never escape a handler: they are logged with a
//! human-readable prefix and communicated to the user through rendered
//! text. The only non-2xx response on these routes is the 400 for a
//! rejected authorization code.

mod callback;
mod health;
mod login;
mod queue;
mod search;

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use queue::queue;
pub use search::search;
