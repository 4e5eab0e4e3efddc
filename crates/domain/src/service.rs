//! Parsed web-service model.
//!
//! The retrieval pipeline resolves each WSDL location to a `WebService`,
//! which is what the browsing layer displays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One operation exposed by a web service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebMethod {
    /// Operation name as declared in the service description.
    pub name: String,
    /// Endpoint address the operation is invoked against.
    pub endpoint: String,
    /// SOAP action header value, when the binding declares one.
    pub soap_action: Option<String>,
}

impl WebMethod {
    /// Creates a method with no SOAP action.
    #[must_use]
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            soap_action: None,
        }
    }

    /// Sets the SOAP action.
    #[must_use]
    pub fn with_soap_action(mut self, action: impl Into<String>) -> Self {
        self.soap_action = Some(action.into());
        self
    }
}

/// A parsed web-service description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebService {
    /// The WSDL location this service was retrieved from. Also the key
    /// the service is stored under.
    pub location: String,
    /// Service name from the description, or one derived from the
    /// location when the document does not name itself.
    pub name: String,
    /// Operations exposed by the service.
    pub methods: Vec<WebMethod>,
    /// When retrieval finished.
    pub retrieved_at: DateTime<Utc>,
}

impl WebService {
    /// Creates a service retrieved now.
    #[must_use]
    pub fn new(location: impl Into<String>, name: impl Into<String>, methods: Vec<WebMethod>) -> Self {
        Self {
            location: location.into(),
            name: name.into(),
            methods,
            retrieved_at: Utc::now(),
        }
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&WebMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_method_lookup() {
        let service = WebService::new(
            "http://example.com/stock?wsdl",
            "StockQuote",
            vec![
                WebMethod::new("GetLastTradePrice", "http://example.com/stock"),
                WebMethod::new("GetQuoteHistory", "http://example.com/stock")
                    .with_soap_action("urn:GetQuoteHistory"),
            ],
        );

        assert!(service.method("GetLastTradePrice").is_some());
        assert_eq!(
            service.method("GetQuoteHistory").unwrap().soap_action.as_deref(),
            Some("urn:GetQuoteHistory")
        );
        assert!(service.method("Missing").is_none());
    }
}
