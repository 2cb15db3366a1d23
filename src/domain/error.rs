//! Error types for the blogview store.
//!
//! This module defines the centralized error type [`BlogviewError`], the
//! [`Result`] alias used by loaders and configuration parsing, and
//! [`LoadFailure`], the recorded form of a failed post load. All errors are
//! implemented using the `thiserror` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for blogview operations.
///
/// Only the loading path and configuration parsing can fail. Filtering and
/// substring matching are total functions and never produce an error.
///
/// # Examples
///
/// ```
/// use blogview::BlogviewError;
///
/// fn fetch() -> Result<(), BlogviewError> {
///     Err(BlogviewError::Loader("upstream returned 503".to_string()))
/// }
///
/// assert_eq!(
///     fetch().unwrap_err().to_string(),
///     "Loader error: upstream returned 503"
/// );
/// ```
#[derive(Debug, Error)]
pub enum BlogviewError {
    /// The post loader rejected or panicked.
    ///
    /// The string carries the loader's own description of the failure.
    #[error("Loader error: {0}")]
    Loader(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically a missing
    /// or unreadable posts file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A posts payload could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for blogview operations.
pub type Result<T> = std::result::Result<T, BlogviewError>;

/// A load attempt that failed.
///
/// Unlike [`BlogviewError`], this is cloneable and comparable so it can be
/// kept in the load state and shipped inside worker replies. The underlying
/// error is flattened into `cause` when the failure is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("failed to load posts: {cause}")]
pub struct LoadFailure {
    /// Display form of the underlying error.
    pub cause: String,
}

impl LoadFailure {
    #[must_use]
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

impl From<&BlogviewError> for LoadFailure {
    fn from(error: &BlogviewError) -> Self {
        Self::new(error.to_string())
    }
}
