use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use super::{LockStore, StoreError};

// key -> deadline after which the row no longer exists
type Table = HashMap<String, Instant>;

/// In-memory lock store backed by `Arc<RwLock<HashMap>>`.
///
/// Provides real insert-if-absent semantics under a single process: the row
/// check and insert happen under one write lock, so two racing `try_insert`
/// calls for the same key resolve to exactly one winner. Expired rows are
/// reaped lazily on access, which is observationally the same as the backend
/// removing them on its own.
///
/// Clone-friendly (cloning shares the same underlying tables). This is both
/// the unit-test double and a usable single-process backend.
#[derive(Clone)]
pub struct InMemoryLockStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl InMemoryLockStore {
    pub fn new() -> Self {
        InMemoryLockStore {
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryLockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStore for InMemoryLockStore {
    fn try_insert(&self, table: &str, key: &str, ttl: Duration) -> Result<bool, StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Backend("lock table poisoned".into()))?;
        let table = tables.get_mut(table).ok_or_else(|| StoreError::MissingSchema {
            table: table.to_string(),
        })?;

        let now = Instant::now();
        if let Some(deadline) = table.get(key) {
            if *deadline > now {
                return Ok(false);
            }
        }
        table.insert(key.to_string(), now + ttl);
        Ok(true)
    }

    fn delete(&self, table: &str, key: &str) -> Result<(), StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Backend("lock table poisoned".into()))?;
        let table = tables.get_mut(table).ok_or_else(|| StoreError::MissingSchema {
            table: table.to_string(),
        })?;
        table.remove(key);
        Ok(())
    }

    fn ensure_schema(&self, table: &str, _key_column: &str) -> Result<(), StoreError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::Backend("lock table poisoned".into()))?;
        tables.entry(table.to_string()).or_insert_with(Table::new);
        Ok(())
    }
}
