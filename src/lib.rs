//! Noizee Web Front-End Library
//!
//! This library implements a small web application for authenticating against
//! the Spotify Web API, searching its catalog, and queueing tracks for
//! playback. It wires four HTTP endpoints to an in-memory token store and a
//! thin Spotify client, rendering every result as a static HTML fragment.
//!
//! # Modules
//!
//! - `api` - HTTP endpoint handlers for the local web server
//! - `config` - Configuration management and environment variables
//! - `management` - In-memory token storage and refresh policy
//! - `render` - Static HTML page rendering
//! - `server` - Local HTTP server hosting the endpoints
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions

pub mod api;
pub mod config;
pub mod management;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Authentication successful!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for unrecoverable startup errors such as missing configuration
/// or an unparsable bind address. Request handlers never call this; they log
/// with [`warning!`] and render a user-facing message instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: failed token refreshes, rejected provider
/// calls, and other conditions that degrade a single request without
/// terminating the process.
///
/// # Example
///
/// ```
/// warning!("Token refresh failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
