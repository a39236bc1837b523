use std::env;

use tracing::warn;
use url::Url;

/// Environment variable carrying the backend base URL.
pub const API_BASE_URL_ENV: &str = "MARKS_API_BASE_URL";

/// What the UI shows when no base URL is configured.
pub const NOT_SET: &str = "Not set";

/// Where the backend lives. A missing URL is a valid configuration: calls
/// fail with `ApiError::NotConfigured` instead of the app refusing to start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<Url>,
}

impl ApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_raw(env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    /// Build from a raw string. Blank values count as unset; values that are
    /// not absolute http(s) URLs are logged and treated as unset.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::default();
        };

        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self {
                base_url: Some(url),
            },
            Ok(url) => {
                warn!(scheme = url.scheme(), "ignoring API base URL with unsupported scheme");
                Self::default()
            }
            Err(err) => {
                warn!(error = %err, "ignoring unparseable API base URL");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url: Some(base_url),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    #[must_use]
    pub fn display_base_url(&self) -> String {
        self.base_url
            .as_ref()
            .map_or_else(|| NOT_SET.to_owned(), Url::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_displays_not_set() {
        let config = ApiConfig::from_raw(None);
        assert!(!config.is_configured());
        assert_eq!(config.display_base_url(), "Not set");
    }

    #[test]
    fn blank_url_counts_as_missing() {
        assert_eq!(ApiConfig::from_raw(Some("   ")), ApiConfig::default());
    }

    #[test]
    fn invalid_urls_are_ignored() {
        assert!(!ApiConfig::from_raw(Some("not a url")).is_configured());
        assert!(!ApiConfig::from_raw(Some("ftp://example.com")).is_configured());
    }

    #[test]
    fn valid_url_is_kept() {
        let config = ApiConfig::from_raw(Some(" https://marks.example.com/api "));
        assert_eq!(
            config.base_url().map(Url::as_str),
            Some("https://marks.example.com/api")
        );
        assert_eq!(config.display_base_url(), "https://marks.example.com/api");
    }
}
