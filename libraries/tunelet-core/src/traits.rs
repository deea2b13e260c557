//! Collaborator traits consumed by the playback core.

use crate::error::{CatalogError, StoreError};
use crate::types::{Track, TrackDetail, TrackId, TrackPage};
use async_trait::async_trait;

/// Remote track catalog.
///
/// Supplies track metadata pages, search results, and per-track detail
/// records. Implementations own their transport concerns (timeouts,
/// auth); no retry is expected of callers.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch the detail record for a single track.
    ///
    /// # Errors
    /// Returns an error if the catalog is unreachable, answers with a
    /// non-success status, or returns an undecodable body.
    async fn track_detail(&self, id: TrackId) -> Result<TrackDetail, CatalogError>;

    /// Fetch one page of the chart listing starting at `index`.
    ///
    /// # Errors
    /// Same failure modes as [`Catalog::track_detail`].
    async fn chart_tracks(&self, index: u32) -> Result<TrackPage, CatalogError>;

    /// Search the catalog for tracks matching `query`.
    ///
    /// # Errors
    /// Same failure modes as [`Catalog::track_detail`].
    async fn search(&self, query: &str) -> Result<Vec<Track>, CatalogError>;
}

/// Persistent key-value store for resolved preview URLs.
///
/// Entries are write-once-per-key in practice (a resolved URL is
/// assumed stable for a given track), but overwriting with the same or
/// a new value is allowed and must be harmless.
pub trait PreviewStore: Send + Sync {
    /// Look up a stored value.
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value, overwriting any previous one.
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Key under which a track's resolved preview URL is stored.
pub fn preview_cache_key(id: TrackId) -> String {
    format!("track_{id}")
}
