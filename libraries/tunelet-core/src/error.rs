//! Error types reported by the external collaborators.

use thiserror::Error;

/// Errors reported by a [`Catalog`](crate::traits::Catalog) collaborator.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be reached (connect failure or timeout)
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),

    /// The catalog answered with a non-success status code
    #[error("Catalog returned status {0}")]
    Status(u16),

    /// The catalog body could not be decoded
    #[error("Malformed catalog response: {0}")]
    Malformed(String),

    /// The configured catalog base URL is not usable
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

/// Errors reported by a [`PreviewStore`](crate::traits::PreviewStore)
/// collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be opened
    #[error("Store open failed: {0}")]
    Open(String),

    /// A read from the store failed
    #[error("Store read failed: {0}")]
    Read(String),

    /// A write to the store failed
    #[error("Store write failed: {0}")]
    Write(String),
}
