use thiserror::Error;

/// Everything that can go wrong before the wait loop starts.
///
/// All variants are non-recoverable for the invocation and map to the same
/// user-visible exit status; the distinction only matters for the diagnostic
/// printed to stderr.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid timeout '{0}': expected a non-negative number of seconds")]
    InvalidTimeout(String),

    #[error("no paths to wait for")]
    MissingPaths,

    #[error("path arguments must not be empty")]
    EmptyPath,
}

pub type UsageResult<T> = Result<T, UsageError>;
