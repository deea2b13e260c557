//! HTTP client for the Tunelet track catalog.
//!
//! Implements the [`Catalog`](tunelet_core::Catalog) collaborator trait
//! against a Deezer-style public catalog API: chart pages, search, and
//! per-track detail records. The base URL is configurable so tests can
//! point the client at a local mock server.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod wire;

pub use client::{HttpCatalog, DEFAULT_BASE_URL};
