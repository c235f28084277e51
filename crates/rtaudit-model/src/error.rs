use thiserror::Error;

/// Structural anomalies in the export file. All fatal: a file that does
/// not match the expected block layout must not produce a partial report.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("duplicate identifier: URN {urn} terminates more than one block")]
    DuplicateIdentifier { urn: String },
    #[error("malformed block for URN {urn}: {tokens} group/modality token(s) do not pair up")]
    MalformedBlock { urn: String, tokens: usize },
    #[error("invalid group number: {value:?} is not an integer")]
    InvalidGroupNumber { value: String },
}

pub type Result<T> = std::result::Result<T, AuditError>;
