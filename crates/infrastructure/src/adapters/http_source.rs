//! WSDL source implementation over HTTP and the local filesystem.

use std::future::Future;

use wsdlview_application::{SourceError, WsdlSource};
use wsdlview_domain::{ProxyConfig, WebService, WsdlLocation};

use crate::wsdl;

use super::build_client;

/// The primary `WsdlSource` adapter: downloads `http`/`https` locations
/// through reqwest, reads `file` locations from disk, and extracts the
/// service model from the document text.
///
/// Error channel mapping: anything that prevents getting the document
/// bytes (network, HTTP error status, unreadable file) is a recoverable
/// `Transport` failure; a document that cannot be used is a fatal
/// `Document` failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpWsdlSource;

impl HttpWsdlSource {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl WsdlSource for HttpWsdlSource {
    fn retrieve(
        &self,
        location: &WsdlLocation,
        proxy: &ProxyConfig,
    ) -> impl Future<Output = Result<WebService, SourceError>> + Send {
        let location = location.clone();
        let proxy = proxy.clone();
        async move {
            let text = fetch_text(&location, &proxy).await?;
            let service = wsdl::parse_document(&text, location.as_str())
                .map_err(|e| SourceError::Document(e.to_string()))?;
            tracing::debug!(
                wsdl = %location,
                methods = service.methods.len(),
                "retrieved service description"
            );
            Ok(service)
        }
    }
}

async fn fetch_text(location: &WsdlLocation, proxy: &ProxyConfig) -> Result<String, SourceError> {
    if let Some(path) = location.file_path() {
        return tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| SourceError::Transport(format!("{}: {e}", path.display())));
    }

    let client = build_client(proxy)?;
    let response = client
        .get(location.as_str())
        .send()
        .await
        .map_err(|e| SourceError::Transport(e.to_string()))?
        .error_for_status()
        .map_err(|e| SourceError::Transport(e.to_string()))?;
    response
        .text()
        .await
        .map_err(|e| SourceError::Transport(e.to_string()))
}
