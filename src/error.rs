use std::fmt;

/// Error type for store and façade operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record matched the given id or alternate key.
    NotFound { collection: &'static str, id: String },
    /// A record with this id already exists. Ids are assigned centrally,
    /// so this indicates an internal invariant violation.
    DuplicateId { collection: &'static str, id: String },
    /// A collection lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { collection, id } => {
                write!(f, "record not found: {}:{}", collection, id)
            }
            StoreError::DuplicateId { collection, id } => {
                write!(f, "duplicate id in {}: {}", collection, id)
            }
            StoreError::LockPoisoned(operation) => {
                write!(f, "collection lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
