//! Settings persistence port

use std::future::Future;

use thiserror::Error;
use wsdlview_domain::UserSettings;

/// Error from the settings store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("settings persistence failed: {0}")]
pub struct StoreError(pub String);

/// Port for persisting user settings.
///
/// The session only writes through this port; loading is done by the host
/// before the session exists.
pub trait SettingsStore: Send + Sync {
    /// Persists the given settings durably.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the settings cannot be written.
    fn save(&self, settings: &UserSettings) -> impl Future<Output = Result<(), StoreError>> + Send;
}
