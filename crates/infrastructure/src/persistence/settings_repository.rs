//! User settings persistence.
//!
//! Stores user settings in the platform-specific config directory:
//! - Linux/macOS: ~/.config/wsdlview/settings.json
//! - Windows: %APPDATA%/wsdlview/settings.json

use std::future::Future;
use std::path::PathBuf;

use tokio::fs;
use wsdlview_application::{SettingsStore, StoreError};
use wsdlview_domain::UserSettings;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Could not determine config directory.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Repository for user settings persistence.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    root: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository over the platform config directory.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Creates a repository over an explicit directory. Used by tests
    /// and portable installs.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Returns the directory settings are stored in.
    fn config_dir(&self) -> Option<PathBuf> {
        self.root
            .clone()
            .or_else(|| dirs::config_dir().map(|p| p.join("wsdlview")))
    }

    /// Returns the path to the settings file.
    #[must_use]
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config_dir().map(|p| p.join("settings.json"))
    }

    /// Loads user settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError` if the file exists but cannot be read
    /// or parsed.
    pub async fn load(&self) -> Result<UserSettings, SettingsError> {
        let Some(path) = self.settings_path() else {
            return Ok(UserSettings::default());
        };

        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read(&path).await?;
        let settings = serde_json::from_slice(&content)?;
        Ok(settings)
    }

    /// Saves user settings to disk, creating the config directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsError` if the directory cannot be determined
    /// or the file cannot be written.
    pub async fn save(&self, settings: &UserSettings) -> Result<(), SettingsError> {
        let Some(config_dir) = self.config_dir() else {
            return Err(SettingsError::NoConfigDir);
        };
        let Some(path) = self.settings_path() else {
            return Err(SettingsError::NoConfigDir);
        };

        fs::create_dir_all(&config_dir).await?;

        let content = serde_json::to_vec_pretty(settings)?;
        fs::write(&path, content).await?;

        Ok(())
    }
}

impl SettingsStore for SettingsRepository {
    fn save(&self, settings: &UserSettings) -> impl Future<Output = Result<(), StoreError>> + Send {
        async move {
            Self::save(self, settings)
                .await
                .map_err(|e| StoreError(e.to_string()))
        }
    }
}
