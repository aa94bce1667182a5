use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A layer name outside the enumerated set (DEFAULT, SYSTEM,
    /// DATABASE, HOST). The store's spelling is preserved verbatim.
    #[error("unrecognized layer name: {0}")]
    UnrecognizedLayer(String),
}
