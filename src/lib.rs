mod lock;
mod schema;
mod store;

pub use lock::{DistributedLock, DEFAULT_KEY_COLUMN, DEFAULT_TABLE, DEFAULT_TTL};
pub use schema::SchemaProvisioner;
pub use store::{InMemoryLockStore, LockStore, StoreError};
