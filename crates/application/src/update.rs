//! Advisory update check.
//!
//! Runs once at startup when enabled. Structurally a miniature retrieval:
//! one fetch with a timeout. It is advisory only, so every failure is
//! logged at debug and swallowed; the session is never disturbed by it.

use wsdlview_domain::UserSettings;

use crate::ports::{UpdateInfo, UpdateSource};

/// Checks the configured endpoint for a newer release.
pub struct UpdateCheck<U> {
    source: U,
}

impl<U: UpdateSource> UpdateCheck<U> {
    /// Creates an update check over the given source.
    pub const fn new(source: U) -> Self {
        Self { source }
    }

    /// Fetches release metadata and compares it against
    /// `current_version`.
    ///
    /// Returns the released info when a newer version is available, and
    /// `None` when the check is disabled, up to date, or failed.
    pub async fn check(&self, current_version: &str, settings: &UserSettings) -> Option<UpdateInfo> {
        if !settings.update_check.enabled {
            return None;
        }

        let fetch = self
            .source
            .latest(&settings.update_check.url, &settings.proxy);
        match tokio::time::timeout(settings.retrieve_timeout(), fetch).await {
            Ok(Ok(info)) if is_newer(&info.version, current_version) => Some(info),
            Ok(Ok(info)) => {
                tracing::debug!(latest = %info.version, current = %current_version, "no update available");
                None
            }
            Ok(Err(error)) => {
                tracing::debug!(%error, "update check failed");
                None
            }
            Err(_elapsed) => {
                tracing::debug!("update check timed out");
                None
            }
        }
    }
}

/// Compares dotted version strings component-wise, numerically.
fn is_newer(candidate: &str, current: &str) -> bool {
    let parse = |v: &str| -> Vec<u64> {
        v.trim_start_matches('v')
            .split('.')
            .map(|part| part.parse().unwrap_or(0))
            .collect()
    };
    parse(candidate) > parse(current)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::future::Future;
    use std::time::Duration;

    use wsdlview_domain::ProxyConfig;

    use super::*;
    use crate::ports::SourceError;

    struct FixedSource {
        delay: Duration,
        result: Result<UpdateInfo, SourceError>,
    }

    impl UpdateSource for FixedSource {
        fn latest(
            &self,
            _endpoint: &str,
            _proxy: &ProxyConfig,
        ) -> impl Future<Output = Result<UpdateInfo, SourceError>> + Send {
            let delay = self.delay;
            let result = self.result.clone();
            async move {
                tokio::time::sleep(delay).await;
                result
            }
        }
    }

    fn info(version: &str) -> UpdateInfo {
        UpdateInfo {
            version: version.to_string(),
            download_url: "https://example.com/download".to_string(),
        }
    }

    #[test]
    fn test_is_newer() {
        assert!(is_newer("0.2.0", "0.1.0"));
        assert!(is_newer("1.0", "0.9.9"));
        assert!(is_newer("0.1.1", "0.1"));
        assert!(is_newer("v0.2.0", "0.1.9"));
        assert!(!is_newer("0.1.0", "0.1.0"));
        assert!(!is_newer("0.1.0", "0.2.0"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reports_newer_version() {
        let check = UpdateCheck::new(FixedSource {
            delay: Duration::from_millis(10),
            result: Ok(info("9.9.9")),
        });
        let notice = check.check("0.1.0", &UserSettings::default()).await;
        assert_eq!(notice.unwrap().version, "9.9.9");
    }

    #[tokio::test(start_paused = true)]
    async fn test_silent_when_up_to_date() {
        let check = UpdateCheck::new(FixedSource {
            delay: Duration::from_millis(10),
            result: Ok(info("0.1.0")),
        });
        assert!(check.check("0.1.0", &UserSettings::default()).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_swallowed() {
        let check = UpdateCheck::new(FixedSource {
            delay: Duration::from_millis(10),
            result: Err(SourceError::Transport("unreachable".to_string())),
        });
        assert!(check.check("0.1.0", &UserSettings::default()).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_swallowed() {
        let check = UpdateCheck::new(FixedSource {
            delay: Duration::from_secs(3_600),
            result: Ok(info("9.9.9")),
        });
        assert!(check.check("0.1.0", &UserSettings::default()).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_check_does_nothing() {
        let check = UpdateCheck::new(FixedSource {
            delay: Duration::from_millis(10),
            result: Ok(info("9.9.9")),
        });
        let mut settings = UserSettings::default();
        settings.update_check.enabled = false;
        assert!(check.check("0.1.0", &settings).await.is_none());
    }
}
