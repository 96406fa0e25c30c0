use std::time::Duration;

use super::StoreError;

/// Contract a storage backend must offer to host lock rows.
///
/// The backend is expected to provide linearizable insert-if-absent on a
/// single key, expiry of rows once their TTL elapses, and unconditional
/// delete by key. Anything with those three properties can back a
/// [`DistributedLock`](crate::DistributedLock): a Cassandra-style table with
/// `IF NOT EXISTS` + `USING TTL`, a key-value store with conditional puts, a
/// relational table with a unique constraint and an expiry job, or the
/// in-memory [`InMemoryLockStore`](crate::InMemoryLockStore).
///
/// Implementations are shared across lock instances and threads, so all
/// operations take `&self` and must be safe for concurrent use.
pub trait LockStore: Send + Sync {
    /// Atomically insert a row keyed by `key` into `table` with the given
    /// expiry, iff no live row with that key exists.
    ///
    /// Returns `Ok(true)` iff this call inserted the row.
    fn try_insert(&self, table: &str, key: &str, ttl: Duration) -> Result<bool, StoreError>;

    /// Remove the row keyed by `key` from `table` unconditionally.
    ///
    /// Deleting an absent row is a silent no-op.
    fn delete(&self, table: &str, key: &str) -> Result<(), StoreError>;

    /// Idempotently create the backing structure: a table whose sole column
    /// is the key. Safe to call concurrently from multiple processes.
    fn ensure_schema(&self, table: &str, key_column: &str) -> Result<(), StoreError>;
}
