//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the coordination core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod settings_store;
mod update_source;
mod wsdl_source;

pub use settings_store::{SettingsStore, StoreError};
pub use update_source::{UpdateInfo, UpdateSource};
pub use wsdl_source::{SourceError, WsdlSource};
