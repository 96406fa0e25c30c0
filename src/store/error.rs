use std::fmt;

/// Error type for lock store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend failed (connectivity, query execution, driver error).
    Backend(String),
    /// An operation targeted a table that was never provisioned.
    MissingSchema { table: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "backend error: {}", msg),
            StoreError::MissingSchema { table } => {
                write!(f, "table {} has not been provisioned", table)
            }
        }
    }
}

impl std::error::Error for StoreError {}
