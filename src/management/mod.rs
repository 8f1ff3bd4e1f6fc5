//! # Management Module
//!
//! High-level state management for the application. The only state the
//! front-end carries is the current OAuth token pair, held in memory for
//! the lifetime of the process by [`TokenStore`].

mod auth;

pub use auth::TokenStore;
