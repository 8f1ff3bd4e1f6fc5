use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub artists: Vec<TrackArtist>,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

/// Flattened view of a search hit, ready for rendering.
///
/// Artists are joined with `", "` in provider order; `image_url` is the
/// first album-art image, or empty when the album carries none.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    pub name: String,
    pub artists: String,
    pub image_url: String,
    pub uri: String,
}

impl From<&Track> for TrackRow {
    fn from(track: &Track) -> Self {
        let artists = track
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let image_url = track
            .album
            .images
            .first()
            .map(|i| i.url.clone())
            .unwrap_or_default();

        TrackRow {
            name: track.name.clone(),
            artists,
            image_url,
            uri: track.uri.clone(),
        }
    }
}
