mod lock;

pub use lock::{DistributedLock, DEFAULT_KEY_COLUMN, DEFAULT_TABLE, DEFAULT_TTL};
