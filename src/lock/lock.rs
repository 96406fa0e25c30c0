use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::store::{LockStore, StoreError};

/// Table holding lock rows unless overridden at construction.
pub const DEFAULT_TABLE: &str = "distributed_locks";

/// Sole column of the lock table: the lock identifier.
pub const DEFAULT_KEY_COLUMN: &str = "id";

/// How long a lock row survives before the backend expires it.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10);

/// A mutual-exclusion lock shared between processes through a storage
/// backend.
///
/// The lock is a single row keyed by `lock_id`: whoever inserts the row
/// holds the lock, and the insert itself is the atomic test-and-set (the
/// backend's conditional insert both checks and claims the key in one
/// linearizable step). The row carries a TTL so a holder that crashes
/// without releasing frees the lock once the TTL elapses.
///
/// The instance itself is stateless between calls (all lock state lives in
/// the backend), so one `DistributedLock` can be reused across
/// acquire/release cycles and shared freely between threads.
pub struct DistributedLock<S> {
    store: Arc<S>,
    lock_id: String,
    ttl: Duration,
    table: String,
}

impl<S> DistributedLock<S> {
    /// Create a lock for `lock_id` against a shared backend client, with the
    /// default TTL and table.
    pub fn new(store: Arc<S>, lock_id: impl Into<String>) -> Self {
        DistributedLock {
            store,
            lock_id: lock_id.into(),
            ttl: DEFAULT_TTL,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Set the row TTL. This bounds how long a crashed holder keeps the lock.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the table this lock's row lives in.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn lock_id(&self) -> &str {
        &self.lock_id
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl<S: LockStore> DistributedLock<S> {
    /// Try to acquire the lock, retrying until `timeout` worth of attempts
    /// has elapsed.
    ///
    /// Returns `Ok(true)` as soon as one conditional insert lands, `Ok(false)`
    /// once the time spent across failed attempts reaches `timeout`. Attempts
    /// run back to back with no sleep in between; the backend round-trip is
    /// the pacing. A zero timeout still makes exactly one attempt.
    ///
    /// Timeout accounting sums the measured duration of each attempt, so a
    /// single attempt that outlives `timeout` ends the loop. Backend errors
    /// abort the loop and propagate; not acquiring in time is not an error.
    pub fn acquire(&self, timeout: Duration) -> Result<bool, StoreError> {
        let mut elapsed = Duration::ZERO;

        loop {
            let attempt = Instant::now();
            let acquired = self.store.try_insert(&self.table, &self.lock_id, self.ttl)?;
            elapsed += attempt.elapsed();
            debug!(lock_id = %self.lock_id, acquired, ?elapsed, "lock attempt");

            if acquired {
                return Ok(true);
            }
            if elapsed >= timeout {
                return Ok(false);
            }
        }
    }

    /// Make a single acquisition attempt without waiting.
    pub fn try_acquire(&self) -> Result<bool, StoreError> {
        self.acquire(Duration::ZERO)
    }

    /// Release the lock by deleting its row.
    ///
    /// The delete is unconditional by key: no check is made that this caller
    /// still holds the lock. A caller whose TTL expired mid-critical-section
    /// will delete the row of whoever claimed the lock since; there is no
    /// fencing token or ownership check guarding against that. Releasing a
    /// lock that is not held is a harmless no-op.
    pub fn release(&self) -> Result<(), StoreError> {
        self.store.delete(&self.table, &self.lock_id)?;
        debug!(lock_id = %self.lock_id, "lock released");
        Ok(())
    }
}
