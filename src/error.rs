use thiserror::Error;

/// Query-time failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// No item carries this exact name
    #[error("no item named {name:?} in the catalog")]
    NotFound { name: String },
}

/// Failures while reading a catalog file
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog has no {0:?} column")]
    MissingColumn(&'static str),
}

/// Failures while saving or loading an engine snapshot
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Cbor(#[from] serde_cbor::Error),

    #[error("snapshot format version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },

    /// Decoded fine but the parts do not fit together
    #[error("snapshot is inconsistent: {0}")]
    Inconsistent(String),
}
