use thiserror::Error;

/// Errors emitted while loading reference data or generating movements.
///
/// All variants are fatal: a failed run produces no partial output.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A required catalog entry is missing from the reference tables.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Reference data is malformed or incomplete.
    #[error("invalid reference data: {0}")]
    Data(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
