use thiserror::Error;

use cfgdrift_store::StoreError;

/// Errors from snapshot capture.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The configuration store failed underneath the writer.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
