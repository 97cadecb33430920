//! Engine error types, per spec §7 — boundary-validated argument errors and
//! output I/O errors, surfaced to the CLI as a non-zero exit code.

use thiserror::Error;

/// Errors the engine can report. `main` maps these to exit codes and an
/// stderr message; the enumerator itself never produces one — all of its
/// inputs are validated before the search begins.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    /// The process exit code this error maps to (spec §7: non-zero on
    /// invalid arguments or I/O failure; argument errors are distinguished
    /// from I/O errors so scripts can tell misuse from a transient
    /// environment failure).
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::Argument(_) => 2,
            EngineError::Io(_) => 1,
        }
    }
}
