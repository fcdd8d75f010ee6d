//! Key-value blob slots.
//!
//! The record list lives in a single named slot holding opaque text. Reads
//! and writes are whole-value: `put` overwrites unconditionally.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub trait BlobStore {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite a slot with `value`.
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Slots stored in the `kv` table of the SQLite database.
pub struct SqliteBlobStore {
    pool: DbPool,
}

impl SqliteBlobStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

/// Process-local slots, for tests and previews.
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    slots: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
