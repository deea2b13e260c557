//! Domain types for the Tunelet client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique, stable catalog identifier for a track.
///
/// Doubles as the preview-cache key component and the list key in the
/// UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One playable catalog entry.
///
/// Immutable once received from the catalog; the playback core never
/// mutates track metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover-art URL
    pub cover_url: String,

    /// Track duration in whole seconds
    pub duration_secs: u32,
}

impl Track {
    /// Get the track duration as a [`Duration`]
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Format the duration for display, e.g. `3:05`
    pub fn duration_display(&self) -> String {
        let minutes = self.duration_secs / 60;
        let seconds = self.duration_secs % 60;
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Detail record for a single track as returned by the catalog.
///
/// The catalog may omit the preview clip for some tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDetail {
    /// Track identifier the detail belongs to
    pub id: TrackId,

    /// Short preview clip URL, if the catalog carries one
    pub preview_url: Option<String>,
}

/// One page of tracks from a paginated catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPage {
    /// Tracks on this page, in catalog order
    pub tracks: Vec<Track>,

    /// Total number of tracks in the listing, if reported
    pub total: Option<u64>,

    /// Offset to request the next page with, `None` on the last page
    pub next_index: Option<u32>,
}

impl TrackPage {
    /// Whether another page can be fetched after this one
    pub fn has_more(&self) -> bool {
        self.next_index.is_some()
    }
}
