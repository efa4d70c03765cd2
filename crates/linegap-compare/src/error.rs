//! Error types for the compare crate.

use linegap_diff::DiffError;

/// Errors that can occur while assembling or comparing sources.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// A source was given an empty name.
    #[error("source name must not be empty")]
    EmptySourceName,

    /// Two sources share a name.
    #[error("duplicate source name: {0}")]
    DuplicateSource(String),

    /// A focus name does not match any candidate.
    #[error("unknown source: {0}")]
    UnknownSource(String),

    /// The diff policy was rejected.
    #[error("diff error: {0}")]
    Diff(#[from] DiffError),

    /// Writing an export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for compare results.
pub type CompareResult<T> = Result<T, CompareError>;
