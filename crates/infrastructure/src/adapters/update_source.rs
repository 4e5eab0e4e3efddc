//! Update source implementation.

use std::future::Future;

use serde::Deserialize;
use wsdlview_application::{SourceError, UpdateInfo, UpdateSource};
use wsdlview_domain::ProxyConfig;

use super::build_client;

/// Release metadata document served by the update endpoint.
#[derive(Debug, Deserialize)]
struct ReleaseDocument {
    version: String,
    download_url: String,
}

/// Fetches release metadata over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpUpdateSource;

impl HttpUpdateSource {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UpdateSource for HttpUpdateSource {
    fn latest(
        &self,
        endpoint: &str,
        proxy: &ProxyConfig,
    ) -> impl Future<Output = Result<UpdateInfo, SourceError>> + Send {
        let endpoint = endpoint.to_string();
        let proxy = proxy.clone();
        async move {
            let client = build_client(&proxy)?;
            let response = client
                .get(&endpoint)
                .send()
                .await
                .map_err(|e| SourceError::Transport(e.to_string()))?
                .error_for_status()
                .map_err(|e| SourceError::Transport(e.to_string()))?;

            let document: ReleaseDocument = response.json().await.map_err(|e| {
                if e.is_decode() {
                    SourceError::Document(e.to_string())
                } else {
                    SourceError::Transport(e.to_string())
                }
            })?;

            Ok(UpdateInfo {
                version: document.version,
                download_url: document.download_url,
            })
        }
    }
}
