use thiserror::Error;

/// Errors from change classification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The store returned a layer this engine does not model. `DEFAULT` is
    /// included: default rows must never reach the classifier.
    #[error("unexpected layer name: {0}")]
    UnrecognizedLayer(String),
}

/// Result alias for classification.
pub type ClassifyResult<T> = Result<T, ClassifyError>;
