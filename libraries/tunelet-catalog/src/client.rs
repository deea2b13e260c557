//! The catalog HTTP client.

use crate::wire::{TrackDetailDto, TrackListDto};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use tunelet_core::{Catalog, CatalogError, Track, TrackDetail, TrackId, TrackPage};

/// Default public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deezer.com";

/// HTTP implementation of the [`Catalog`] collaborator.
///
/// # Example
///
/// ```no_run
/// use tunelet_catalog::{HttpCatalog, DEFAULT_BASE_URL};
/// use tunelet_core::{Catalog, TrackId};
///
/// # async fn example() -> Result<(), tunelet_core::CatalogError> {
/// let catalog = HttpCatalog::new(DEFAULT_BASE_URL)?;
/// let detail = catalog.track_detail(TrackId(3135556)).await?;
/// if let Some(url) = detail.preview_url {
///     println!("preview at {url}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpCatalog {
    http: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client for the catalog at `base_url`.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidUrl`] for a base URL without an
    /// http(s) scheme, or [`CatalogError::Unreachable`] if the HTTP
    /// client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(base_url));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tunelet/{} (Mobile)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Unreachable(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn track_detail(&self, id: TrackId) -> Result<TrackDetail, CatalogError> {
        let url = format!("{}/track/{}", self.base_url, id);
        debug!(track_id = %id, url = %url, "Fetching track detail");

        let dto: TrackDetailDto = self.get_json(self.http.get(&url)).await?;

        debug!(
            track_id = %id,
            has_preview = dto.preview.is_some(),
            "Fetched track detail"
        );
        Ok(dto.into_detail())
    }

    async fn chart_tracks(&self, index: u32) -> Result<TrackPage, CatalogError> {
        let url = format!("{}/chart/0/tracks", self.base_url);
        debug!(index, url = %url, "Fetching chart page");

        let dto: TrackListDto = self
            .get_json(self.http.get(&url).query(&[("index", index)]))
            .await?;

        let page = dto.into_page(index);
        debug!(
            index,
            tracks = page.tracks.len(),
            has_more = page.has_more(),
            "Fetched chart page"
        );
        Ok(page)
    }

    async fn search(&self, query: &str) -> Result<Vec<Track>, CatalogError> {
        let url = format!("{}/search", self.base_url);
        debug!(query = %query, url = %url, "Searching catalog");

        let dto: TrackListDto = self
            .get_json(self.http.get(&url).query(&[("q", query)]))
            .await?;

        let tracks: Vec<Track> = dto.data.into_iter().map(|t| t.into_track()).collect();
        debug!(query = %query, results = tracks.len(), "Search complete");
        Ok(tracks)
    }
}
