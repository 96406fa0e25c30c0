use std::sync::Once;
use std::thread;
use std::time::Duration;

use rowlock::{LockStore, StoreError};

/// Install a fmt subscriber once per test binary so
/// `RUST_LOG=debug cargo test` shows the lock protocol chatter.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Wraps a store and sleeps before every row operation, standing in for the
/// backend round-trip. Paces the busy-poll loop in timing-sensitive tests.
pub struct LatencyStore<S> {
    inner: S,
    latency: Duration,
}

impl<S> LatencyStore<S> {
    pub fn new(inner: S, latency: Duration) -> Self {
        LatencyStore { inner, latency }
    }
}

impl<S: LockStore> LockStore for LatencyStore<S> {
    fn try_insert(&self, table: &str, key: &str, ttl: Duration) -> Result<bool, StoreError> {
        thread::sleep(self.latency);
        self.inner.try_insert(table, key, ttl)
    }

    fn delete(&self, table: &str, key: &str) -> Result<(), StoreError> {
        thread::sleep(self.latency);
        self.inner.delete(table, key)
    }

    fn ensure_schema(&self, table: &str, key_column: &str) -> Result<(), StoreError> {
        self.inner.ensure_schema(table, key_column)
    }
}
