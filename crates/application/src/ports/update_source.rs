//! Update source port

use std::future::Future;

use wsdlview_domain::ProxyConfig;

use super::wsdl_source::SourceError;

/// Release metadata published by the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    /// Latest released version.
    pub version: String,
    /// Where to download it.
    pub download_url: String,
}

/// Port for fetching release metadata.
pub trait UpdateSource: Send + Sync {
    /// Fetches the latest release metadata from `endpoint` through
    /// `proxy`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Transport` for fetch failures and
    /// `SourceError::Document` for malformed metadata.
    fn latest(
        &self,
        endpoint: &str,
        proxy: &ProxyConfig,
    ) -> impl Future<Output = Result<UpdateInfo, SourceError>> + Send;
}
