//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The WSDL location is empty or syntactically invalid.
    #[error("invalid wsdl location: {0}")]
    InvalidLocation(String),

    /// The location uses a scheme other than http, https or file.
    #[error("unsupported scheme in wsdl location: {0}")]
    UnsupportedScheme(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
