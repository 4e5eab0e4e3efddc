//! Lightweight WSDL document extraction.
//!
//! Pulls the service name, operation names, endpoint address and SOAP
//! actions out of a WSDL document with prefix-agnostic pattern matching.
//! This is deliberately not a full XML parser: browsing only needs the
//! service structure, and the `WsdlSource` port keeps a real parser
//! swappable behind the same boundary.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use wsdlview_domain::{WebMethod, WebService};

/// Document extraction errors. Routed through the fatal fault channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document has no WSDL definitions element at all.
    #[error("document does not contain a WSDL definitions element")]
    NotWsdl,
}

#[allow(clippy::expect_used)]
static DEFINITIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?:\w+:)?definitions[\s>]").expect("valid regex")
});

#[allow(clippy::expect_used)]
static DEFINITIONS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:\w+:)?definitions\b[^>]*?\sname="([^"]+)""#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static SERVICE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:\w+:)?service\b[^>]*?\sname="([^"]+)""#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static OPERATION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:\w+:)?operation\b[^>]*?\sname="([^"]+)""#).expect("valid regex")
});

#[allow(clippy::expect_used)]
static SOAP_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<(?:\w+:)?operation\b[^>]*?\sname="([^"]+)"[^>]*>\s*<(?:\w+:)?operation\b[^>]*?\ssoapAction="([^"]*)""#,
    )
    .expect("valid regex")
});

#[allow(clippy::expect_used)]
static ADDRESS_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:\w+:)?address\b[^>]*?\slocation="([^"]+)""#).expect("valid regex")
});

/// Extracts a `WebService` from WSDL document text.
///
/// `location` is used as the container key, as the fallback endpoint when
/// the document declares no address, and as the fallback service name.
///
/// # Errors
///
/// Returns `ParseError::NotWsdl` when the document has no definitions
/// element.
pub fn parse_document(text: &str, location: &str) -> Result<WebService, ParseError> {
    if !DEFINITIONS.is_match(text) {
        return Err(ParseError::NotWsdl);
    }

    let name = SERVICE_NAME
        .captures(text)
        .or_else(|| DEFINITIONS_NAME.captures(text))
        .map_or_else(|| derive_name(location), |c| c[1].to_string());

    let endpoint = ADDRESS_LOCATION
        .captures(text)
        .map_or_else(|| location.to_string(), |c| c[1].to_string());

    let mut methods: Vec<WebMethod> = Vec::new();
    for capture in OPERATION_NAME.captures_iter(text) {
        let op = &capture[1];
        if methods.iter().any(|m| m.name == op) {
            // portType and binding both declare the operation.
            continue;
        }
        methods.push(WebMethod::new(op, endpoint.clone()));
    }

    for capture in SOAP_ACTION.captures_iter(text) {
        let (op, action) = (&capture[1], &capture[2]);
        if action.is_empty() {
            continue;
        }
        if let Some(method) = methods.iter_mut().find(|m| m.name == op) {
            method.soap_action = Some(action.to_string());
        }
    }

    Ok(WebService::new(location, name, methods))
}

/// Derives a display name from the location when the document does not
/// name itself: last path segment without query or extension.
fn derive_name(location: &str) -> String {
    let tail = location
        .split(['?', '#'])
        .next()
        .unwrap_or(location)
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(location);
    let name = tail
        .strip_suffix(".wsdl")
        .or_else(|| tail.strip_suffix(".xml"))
        .unwrap_or(tail);
    if name.is_empty() {
        location.to_string()
    } else {
        name.to_string()
    }
}
