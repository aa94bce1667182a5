use thiserror::Error;

/// Errors from configuration store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached, opened, or authenticated to.
    #[error("store connection error: {0}")]
    Connectivity(String),

    /// The store identity query returned rows in an unexpected shape.
    #[error("unexpected identity query result: {0}")]
    IdentityShape(String),

    /// The session is open to the wrong database for administrative work.
    #[error("session must be opened to {expected}, got {actual}")]
    WrongDatabase { expected: String, actual: String },

    /// An operation requires the baseline table but it does not exist.
    #[error("baseline table does not exist")]
    BaselineMissing,

    /// Serialization or deserialization failure in a backend codec.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
