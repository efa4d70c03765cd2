//! Error types for the diff crate.

/// Errors raised when building a differ from an invalid policy.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The similarity threshold is not a finite number in `[0, 1]`.
    #[error("similarity threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// The lookahead window exceeds the supported maximum.
    #[error("lookahead {requested} exceeds the maximum of {max}")]
    LookaheadTooLarge { requested: usize, max: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
