//! Error types for crontab filter operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrontabError {
    /// A filter was built from values that are out of bounds for its field.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An operation was called on a field kind that does not support it.
    #[error("Unsupported operation: {0}")]
    Usage(String),

    /// Internal consistency failure; unreachable for validated filters.
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// Text that is not a step expression of the form `*/N` or `S/N`.
    #[error("Invalid expression: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CrontabError>;
