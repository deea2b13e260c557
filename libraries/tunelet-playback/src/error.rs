//! Error types for the playback core.

use thiserror::Error;

/// Errors surfaced by the player to the UI layer.
///
/// Clonable so the most recent error can be kept on the session for
/// rendering. None of these are fatal to the process; the player
/// always returns to a consistent state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The catalog entry exists but carries no playable preview clip
    #[error("Track has no playable preview")]
    PreviewUnavailable,

    /// Looking up the preview URL failed
    #[error("Preview resolution failed: {0}")]
    ResolutionFailed(String),

    /// Play was requested with no source loaded
    #[error("No source loaded")]
    NoSourceLoaded,

    /// The catalog collaborator could not be reached
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlayerError>;
