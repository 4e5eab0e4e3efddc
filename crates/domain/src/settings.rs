//! User settings.
//!
//! Everything the tool persists between runs: proxy configuration,
//! retrieval tuning, the startup WSDL list and the update check.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::proxy::ProxyConfig;

/// Default retrieval timeout in milliseconds.
pub const DEFAULT_RETRIEVE_TIMEOUT_MS: u64 = 30_000;

/// Default settle delay applied before a completed service is published,
/// in milliseconds. Purely cosmetic pacing for the display layer.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 250;

/// WSDLs loaded automatically at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartupWsdls {
    /// Whether startup loading is enabled. Disabled durably when a
    /// startup-originated retrieval faults fatally, so the next launch
    /// does not re-trigger the same failure.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// WSDL locations to load at startup.
    #[serde(default)]
    pub locations: Vec<String>,
}

impl Default for StartupWsdls {
    fn default() -> Self {
        Self {
            enabled: true,
            locations: Vec::new(),
        }
    }
}

/// Update-check configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCheckConfig {
    /// Whether the check runs at startup.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Endpoint serving release metadata.
    #[serde(default = "default_update_url")]
    pub url: String,
}

impl Default for UpdateCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_update_url(),
        }
    }
}

/// User settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSettings {
    /// Proxy used for all retrieval and update traffic.
    #[serde(default)]
    pub proxy: ProxyConfig,

    /// Retrieval timeout in milliseconds.
    #[serde(default = "default_retrieve_timeout_ms")]
    pub retrieve_timeout_ms: u64,

    /// Settle delay before publishing a completed service, in
    /// milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// WSDLs loaded automatically at startup.
    #[serde(default)]
    pub startup_wsdls: StartupWsdls,

    /// Update-check configuration.
    #[serde(default)]
    pub update_check: UpdateCheckConfig,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            proxy: ProxyConfig::default(),
            retrieve_timeout_ms: DEFAULT_RETRIEVE_TIMEOUT_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            startup_wsdls: StartupWsdls::default(),
            update_check: UpdateCheckConfig::default(),
        }
    }
}

impl UserSettings {
    /// Retrieval timeout as a `Duration`.
    #[must_use]
    pub const fn retrieve_timeout(&self) -> Duration {
        Duration::from_millis(self.retrieve_timeout_ms)
    }

    /// Settle delay as a `Duration`.
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

const fn default_true() -> bool {
    true
}

const fn default_retrieve_timeout_ms() -> u64 {
    DEFAULT_RETRIEVE_TIMEOUT_MS
}

const fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

fn default_update_url() -> String {
    "https://wsdlview.example.org/releases/latest.json".to_string()
}
