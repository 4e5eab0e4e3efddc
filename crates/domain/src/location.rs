//! WSDL document locations.
//!
//! A location is either an `http`/`https` URL, a `file` URL, or a bare
//! absolute filesystem path. Validation is purely syntactic; whether a
//! file location actually exists is checked at submission time because
//! touching the filesystem is too slow for per-keystroke validation.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// A validated WSDL document location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WsdlLocation(String);

impl WsdlLocation {
    /// Parses and validates a location string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` for empty input or input
    /// that is neither a URL nor an absolute path, and
    /// `DomainError::UnsupportedScheme` for URLs with schemes other than
    /// `http`, `https` or `file`.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLocation("empty location".to_string()));
        }

        if let Ok(url) = Url::parse(trimmed) {
            return match url.scheme() {
                "http" | "https" | "file" => Ok(Self(trimmed.to_string())),
                other => Err(DomainError::UnsupportedScheme(other.to_string())),
            };
        }

        // Not a URL; accept absolute filesystem paths.
        if std::path::Path::new(trimmed).is_absolute() {
            return Ok(Self(trimmed.to_string()));
        }

        Err(DomainError::InvalidLocation(trimmed.to_string()))
    }

    /// Returns the location as the string it was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this location refers to a local file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.file_path().is_some()
    }

    /// Returns the local filesystem path for `file` URLs and bare paths.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        if let Ok(url) = Url::parse(&self.0) {
            if url.scheme() == "file" {
                return url
                    .to_file_path()
                    .ok()
                    .or_else(|| Some(PathBuf::from(url.path())));
            }
            return None;
        }

        Some(PathBuf::from(&self.0))
    }
}

impl fmt::Display for WsdlLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WsdlLocation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
