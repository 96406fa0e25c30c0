use std::sync::Arc;

use tracing::debug;

use crate::lock::{DEFAULT_KEY_COLUMN, DEFAULT_TABLE};
use crate::store::{LockStore, StoreError};

/// Creates the table that holds lock rows.
///
/// Provisioning must happen once before any lock is acquired against a
/// table; locks never provision lazily. The underlying structural operation
/// is if-not-exists, so `provision` is idempotent and safe to call from
/// multiple processes racing at startup.
pub struct SchemaProvisioner<S> {
    store: Arc<S>,
    table: String,
    key_column: String,
}

impl<S> SchemaProvisioner<S> {
    pub fn new(store: Arc<S>) -> Self {
        SchemaProvisioner {
            store,
            table: DEFAULT_TABLE.to_string(),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
        }
    }

    /// Set the table to provision.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the name of the key column.
    pub fn with_key_column(mut self, key_column: impl Into<String>) -> Self {
        self.key_column = key_column.into();
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }
}

impl<S: LockStore> SchemaProvisioner<S> {
    /// Create the lock table if it does not exist yet.
    pub fn provision(&self) -> Result<(), StoreError> {
        self.store.ensure_schema(&self.table, &self.key_column)?;
        debug!(table = %self.table, "lock table provisioned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::store::InMemoryLockStore;

    #[test]
    fn defaults_match_the_lock_table() {
        let provisioner = SchemaProvisioner::new(Arc::new(InMemoryLockStore::new()));
        assert_eq!(provisioner.table(), DEFAULT_TABLE);
        assert_eq!(provisioner.key_column(), DEFAULT_KEY_COLUMN);
    }

    #[test]
    fn provision_creates_a_usable_table() {
        let store = Arc::new(InMemoryLockStore::new());
        SchemaProvisioner::new(Arc::clone(&store))
            .with_table("jobs_locks")
            .with_key_column("name")
            .provision()
            .unwrap();

        assert!(store
            .try_insert("jobs_locks", "nightly", Duration::from_secs(1))
            .unwrap());
    }

    #[test]
    fn provision_twice_is_harmless() {
        let store = Arc::new(InMemoryLockStore::new());
        let provisioner = SchemaProvisioner::new(Arc::clone(&store));

        provisioner.provision().unwrap();
        assert!(store
            .try_insert(DEFAULT_TABLE, "a", Duration::from_secs(1))
            .unwrap());

        provisioner.provision().unwrap();
        assert!(!store
            .try_insert(DEFAULT_TABLE, "a", Duration::from_secs(1))
            .unwrap());
    }
}
