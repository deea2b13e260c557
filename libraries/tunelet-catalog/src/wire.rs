//! Wire-format DTOs for the catalog API.
//!
//! Private to this crate; conversion to `tunelet-core` types happens at
//! the client boundary.

use serde::Deserialize;
use tunelet_core::{Track, TrackDetail, TrackId, TrackPage};

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumDto {
    #[serde(default)]
    pub cover_medium: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackDto {
    pub id: u64,
    pub title: String,
    pub artist: ArtistDto,
    pub album: AlbumDto,
    pub duration: u32,
}

impl TrackDto {
    pub(crate) fn into_track(self) -> Track {
        Track {
            id: TrackId(self.id),
            title: self.title,
            artist: self.artist.name,
            cover_url: self.album.cover_medium,
            duration_secs: self.duration,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackListDto {
    pub data: Vec<TrackDto>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
}

impl TrackListDto {
    /// Convert to a page; pagination advances by the page length.
    pub(crate) fn into_page(self, index: u32) -> TrackPage {
        let fetched = u32::try_from(self.data.len()).unwrap_or(u32::MAX);
        let next_index = self.next.is_some().then(|| index.saturating_add(fetched));
        TrackPage {
            tracks: self.data.into_iter().map(|t| t.into_track()).collect(),
            total: self.total,
            next_index,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackDetailDto {
    pub id: u64,
    #[serde(default)]
    pub preview: Option<String>,
}

impl TrackDetailDto {
    pub(crate) fn into_detail(self) -> TrackDetail {
        TrackDetail {
            id: TrackId(self.id),
            // The catalog serves an empty string for tracks without a
            // playable clip; treat that the same as a missing field.
            preview_url: self.preview.filter(|p| !p.is_empty()),
        }
    }
}
