use thiserror::Error;

/// Errors from drift matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// The drift tuple stream does not carry the expected 9-column shape.
    /// The store's schema has drifted from what this engine assumes.
    #[error("unexpected drift result shape: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },
}

/// Result alias for drift matching.
pub type DiffResult<T> = Result<T, DiffError>;
