//! Tunelet Core
//!
//! Platform-agnostic domain types and collaborator traits for Tunelet,
//! a mobile music-browsing client that plays short catalog previews.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`TrackDetail`], [`TrackPage`]
//! - **Collaborator Traits**: [`Catalog`] (remote track catalog) and
//!   [`PreviewStore`] (persistent preview-URL key-value store)
//! - **Collaborator Errors**: [`CatalogError`], [`StoreError`]
//!
//! The playback core in `tunelet-playback` consumes these traits; it
//! never talks to the network or the disk directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{CatalogError, StoreError};
pub use traits::{preview_cache_key, Catalog, PreviewStore};
pub use types::{Track, TrackDetail, TrackId, TrackPage};
