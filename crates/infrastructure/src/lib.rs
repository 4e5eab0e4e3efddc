//! wsdlview Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: HTTP/file WSDL retrieval, the update-metadata
//! fetch and settings persistence.

pub mod adapters;
pub mod persistence;
pub mod wsdl;

pub use adapters::{HttpUpdateSource, HttpWsdlSource};
pub use persistence::{SettingsError, SettingsRepository};
pub use wsdl::{ParseError, parse_document};
