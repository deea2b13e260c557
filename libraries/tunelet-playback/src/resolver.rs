//! Preview-URL resolution with a persistent lookup cache.

use crate::error::{PlayerError, Result};
use std::sync::Arc;
use tracing::debug;
use tunelet_core::{preview_cache_key, Catalog, CatalogError, PreviewStore, Track};

/// Resolves a playable preview URL for a track.
///
/// The persistent cache is consulted first and unconditionally
/// preferred over a fresh lookup; only a miss issues a catalog call,
/// and a successful lookup is persisted before it is returned. The
/// resolver performs no retry.
pub struct PreviewResolver {
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn PreviewStore>,
}

impl PreviewResolver {
    /// Create a resolver over the given collaborators.
    pub fn new(catalog: Arc<dyn Catalog>, store: Arc<dyn PreviewStore>) -> Self {
        Self { catalog, store }
    }

    /// Resolve a playable preview URL for `track`.
    ///
    /// # Errors
    /// - [`PlayerError::PreviewUnavailable`] if the catalog carries no
    ///   playable clip for the track
    /// - [`PlayerError::CatalogUnavailable`] if the catalog cannot be
    ///   reached
    /// - [`PlayerError::ResolutionFailed`] for any other lookup or
    ///   store failure
    pub async fn resolve(&self, track: &Track) -> Result<String> {
        let key = preview_cache_key(track.id);

        let cached = self
            .store
            .get(&key)
            .map_err(|e| PlayerError::ResolutionFailed(e.to_string()))?;
        if let Some(url) = cached {
            debug!(track_id = %track.id, "Preview cache hit");
            return Ok(url);
        }

        let detail = self
            .catalog
            .track_detail(track.id)
            .await
            .map_err(map_catalog_error)?;
        let url = detail.preview_url.ok_or(PlayerError::PreviewUnavailable)?;

        // A resolution that is never persisted is not a success.
        self.store
            .set(&key, &url)
            .map_err(|e| PlayerError::ResolutionFailed(e.to_string()))?;

        debug!(track_id = %track.id, "Preview resolved and cached");
        Ok(url)
    }
}

fn map_catalog_error(err: CatalogError) -> PlayerError {
    match err {
        CatalogError::Unreachable(msg) => PlayerError::CatalogUnavailable(msg),
        other => PlayerError::ResolutionFailed(other.to_string()),
    }
}
