//! Persistent preview-URL cache.
//!
//! Implements the [`PreviewStore`] collaborator trait over an embedded
//! key-value database. Resolved preview URLs survive process restarts;
//! entries are never expired by this crate.
//!
//! [`MemoryStore`] provides the same contract without persistence, for
//! tests and platforms without usable disk storage.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use redb::{Database, ReadableTable, TableDefinition, TableError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tunelet_core::{PreviewStore, StoreError};

const PREVIEWS: TableDefinition<&str, &str> = TableDefinition::new("previews");

/// Persistent preview-URL store backed by a redb database file.
pub struct PreviewCache {
    db: Database,
}

impl PreviewCache {
    /// Open (or create) the cache database at `path`.
    ///
    /// # Errors
    /// Returns [`StoreError::Open`] if the database cannot be created
    /// or an existing file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path).map_err(|e| StoreError::Open(e.to_string()))?;
        Ok(Self { db })
    }
}

impl PreviewStore for PreviewCache {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Read(e.to_string()))?;
        let table = match txn.open_table(PREVIEWS) {
            Ok(table) => table,
            // A database that has never been written to has no table yet.
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(StoreError::Read(e.to_string())),
        };
        let value = table
            .get(key)
            .map_err(|e| StoreError::Read(e.to_string()))?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        {
            let mut table = txn
                .open_table(PREVIEWS)
                .map_err(|e| StoreError::Write(e.to_string()))?;
            table
                .insert(key, value)
                .map_err(|e| StoreError::Write(e.to_string()))?;
        }
        txn.commit().map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}

/// In-memory preview store with the same contract as [`PreviewCache`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreviewStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
