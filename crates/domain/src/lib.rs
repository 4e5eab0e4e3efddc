//! wsdlview Domain - Core business types
//!
//! This crate defines the domain model for the wsdlview WSDL browser.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod location;
pub mod proxy;
pub mod service;
pub mod settings;

pub use error::{DomainError, DomainResult};
pub use location::WsdlLocation;
pub use proxy::{ProxyConfig, ProxyError};
pub use service::{WebMethod, WebService};
pub use settings::{StartupWsdls, UpdateCheckConfig, UserSettings};
