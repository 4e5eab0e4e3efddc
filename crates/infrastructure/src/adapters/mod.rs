//! Network adapters.

mod http_source;
mod update_source;

pub use http_source::HttpWsdlSource;
pub use update_source::HttpUpdateSource;

use reqwest::Client;
use wsdlview_application::SourceError;
use wsdlview_domain::ProxyConfig;

const USER_AGENT: &str = concat!("wsdlview/", env!("CARGO_PKG_VERSION"));

/// Builds a reqwest client honoring the proxy configuration.
///
/// Clients are built per retrieval; operations are few and short-lived,
/// and the proxy may differ between calls.
pub(crate) fn build_client(proxy: &ProxyConfig) -> Result<Client, SourceError> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10));

    if let Some(url) = proxy.url_with_auth() {
        let proxy = reqwest::Proxy::all(&url)
            .map_err(|e| SourceError::Transport(format!("invalid proxy configuration: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| SourceError::Transport(format!("could not build http client: {e}")))
}
