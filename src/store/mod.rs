mod error;
mod in_memory;
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryLockStore;
pub use store::LockStore;
