//! Domain errors for the curator jobs.

use thiserror::Error;

/// Domain-level errors that can occur while running a maintenance job.
///
/// Per-item failures (a single bad issue body, one failed label update)
/// are logged and skipped at the call site; only run-level failures are
/// surfaced through this type.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid repository identifier '{0}': expected owner/repo")]
    InvalidRepoIdentifier(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
