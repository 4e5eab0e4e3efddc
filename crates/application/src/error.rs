//! Application error types

use thiserror::Error;

/// Reasons a retrieval request is rejected at submission.
///
/// All of these are recoverable: the request is refused, the session
/// continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A file location points at a file that does not exist.
    #[error("{0} file location does not exist")]
    MissingFile(String),

    /// The service was already retrieved; it must be removed before it
    /// can be added again.
    #[error("the project already contains {0}, to refresh remove it and add it again")]
    AlreadyAdded(String),

    /// A retrieval for the same location is still running.
    #[error("{0} is currently being added, wait for it to complete")]
    AlreadyInFlight(String),
}
