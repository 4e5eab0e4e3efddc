//! WSDL source port

use std::future::Future;

use thiserror::Error;
use wsdlview_domain::{ProxyConfig, WebService, WsdlLocation};

/// Failure channels of a WSDL source.
///
/// The two variants route differently through the fault policy:
/// `Transport` is always recoverable, `Document` is fatal to the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The document could not be fetched: network failure, HTTP error
    /// status, unreadable file.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The document was fetched but is not a usable service description.
    #[error("invalid service description: {0}")]
    Document(String),
}

/// Port for fetching and parsing a WSDL document.
///
/// This trait abstracts transport and document extraction, allowing the
/// coordination core to be independent of the HTTP library and of the
/// parsing strategy.
pub trait WsdlSource: Send + Sync {
    /// Fetches the document at `location` through `proxy` and parses it
    /// into a `WebService`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Transport` for fetch failures and
    /// `SourceError::Document` for unusable documents.
    fn retrieve(
        &self,
        location: &WsdlLocation,
        proxy: &ProxyConfig,
    ) -> impl Future<Output = Result<WebService, SourceError>> + Send;
}
