//! Retrieval requests.

use std::time::Duration;

use wsdlview_domain::{ProxyConfig, WsdlLocation};

/// Where a retrieval request came from.
///
/// Startup-originated requests get special fatal-path handling: a fatal
/// fault durably disables startup loading before it is forwarded, so the
/// next launch does not re-trigger the same failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    /// The user asked to add this WSDL.
    User,
    /// The WSDL came from the persisted startup list.
    Startup,
}

/// One accepted request to fetch and parse a WSDL.
///
/// Immutable once constructed; the spawned operation owns it for its
/// whole lifetime.
#[derive(Debug, Clone)]
pub struct RetrievalRequest {
    /// The WSDL to retrieve.
    pub location: WsdlLocation,
    /// Request origin.
    pub origin: RequestOrigin,
    /// Proxy to fetch through.
    pub proxy: ProxyConfig,
    /// How long the fetch+parse may take before it times out.
    pub timeout: Duration,
}

impl RetrievalRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(
        location: WsdlLocation,
        origin: RequestOrigin,
        proxy: ProxyConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            location,
            origin,
            proxy,
            timeout,
        }
    }

    /// Whether this request came from the startup list.
    #[must_use]
    pub fn is_startup(&self) -> bool {
        self.origin == RequestOrigin::Startup
    }
}
