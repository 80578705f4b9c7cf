//! Error types for bundle assembly and JNLP serialization.

use thiserror::Error;

/// Result type alias for all jnlpgen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure falls into one of two categories: configuration errors are
/// raised synchronously while the bundle is being assembled, validation
/// errors are raised during serialization (missing required attributes,
/// missing preconditions, malformed element nesting). I/O faults from the
/// output destination get their own variant so callers can tell a bad bundle
/// from a bad disk.
#[derive(Error, Debug)]
pub enum Error {
    /// An invariant was violated while assembling the bundle, e.g. selecting
    /// a second bundle kind after one is already set.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required attribute or serialization precondition is missing. Any
    /// output written before the failure is an incomplete document and must
    /// be treated as invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// The output destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
