//! Static HTML rendering for every page the server returns.
//!
//! No templating engine: each page is a `String` assembled from the shared
//! style block and the handler's data. Keeping these as pure functions lets
//! the tests exercise the markup without a running server.

use crate::types::TrackRow;

/// Style block prepended to every styled page.
pub const BASE_STYLES: &str = r#"<style>
  body {
    font-family: 'Arial', sans-serif;
    background: #f9f9f9;
    padding: 20px;
    color: #333;
  }
  .search-box {
    max-width: 500px;
    margin: 0 auto 30px;
    display: flex;
    background: #eee;
    border-radius: 50px;
    padding: 10px 20px;
  }
  .search-box input {
    border: none;
    background: transparent;
    flex: 1;
    font-size: 18px;
    outline: none;
  }
  .search-box button {
    background: none;
    border: none;
    cursor: pointer;
    font-size: 18px;
  }
  .track {
    display: flex;
    align-items: center;
    margin-bottom: 20px;
    background: white;
    padding: 10px 15px;
    border-radius: 15px;
    box-shadow: 0 2px 8px rgba(0,0,0,0.05);
  }
  .track img {
    width: 64px;
    height: 64px;
    border-radius: 10px;
    object-fit: cover;
    margin-right: 15px;
  }
  .track-info {
    flex: 1;
  }
  .track-info .name {
    font-size: 16px;
    font-weight: bold;
  }
  .track-info .artist {
    font-size: 14px;
    color: #666;
  }
  .track form {
    margin: 0;
  }
  .add-button {
    width: 36px;
    height: 36px;
    background: #b44cf3;
    border-radius: 50%;
    border: none;
    color: white;
    font-size: 22px;
    font-weight: bold;
    cursor: pointer;
  }
  a {
    display: inline-block;
    margin-top: 30px;
    color: #888;
    text-decoration: none;
  }
</style>"#;

/// The search page shown after a successful login: a single form that
/// submits the query to `/search`.
pub fn search_page() -> String {
    format!(
        r#"{styles}
<div class="search-box">
  <form action="/search" method="get" style="display: flex; width: 100%;">
    <input type="text" name="q" placeholder="Search for a song" required />
    <button type="submit">&#128269;</button>
  </form>
</div>"#,
        styles = BASE_STYLES
    )
}

/// Renders the result list: one row per track with album art, name,
/// artists, and an add-form posting the track URI to `/queue`.
pub fn search_results(rows: &[TrackRow]) -> String {
    let mut html = format!("{}<h2>Results</h2>", BASE_STYLES);

    for row in rows {
        html.push_str(&format!(
            r#"
<div class="track">
  <img src="{image}" alt="cover" />
  <div class="track-info">
    <div class="name">{name}</div>
    <div class="artist">{artists}</div>
  </div>
  <form action="/queue" method="post">
    <input type="hidden" name="uri" value="{uri}" />
    <button class="add-button" type="submit">+</button>
  </form>
</div>"#,
            image = row.image_url,
            name = row.name,
            artists = row.artists,
            uri = row.uri,
        ));
    }

    html.push_str(r#"<a href="/login">&#8592; Back</a>"#);
    html
}

/// Plain message shown when the catalog search fails.
pub fn search_error() -> String {
    String::from("Could not search for tracks.")
}

/// Confirmation page after a track was queued.
pub fn queue_confirmation() -> String {
    format!(
        r#"{styles}<p>Track added to the queue!</p><a href="/login">Back</a>"#,
        styles = BASE_STYLES
    )
}

/// Error page for a failed queue add, embedding the failure text.
pub fn queue_error(message: &str) -> String {
    format!(
        r#"{styles}<p>Could not add the track to the queue: {message}</p><a href="/login">Back</a>"#,
        styles = BASE_STYLES
    )
}

/// Shown when `/queue` is posted without a track URI.
pub fn missing_uri() -> String {
    String::from(r#"<p>No track URI received.</p><a href="/login">Back</a>"#)
}
