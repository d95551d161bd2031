//! Fallback values for components an href leaves out.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ComposeError;

/// Scheme, host and path substituted when an href omits them.
///
/// Together they also form the base document that relative hrefs resolve
/// against: `{scheme}://{host}{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlDefaults {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

impl Default for UrlDefaults {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "example.com".to_string(),
            path: "/".to_string(),
        }
    }
}

impl UrlDefaults {
    /// String form of the base document, e.g. `http://example.com/`.
    pub fn base_str(&self) -> String {
        format!(
            "{}://{}/{}",
            self.scheme.trim(),
            self.host.trim(),
            self.path.trim().trim_start_matches('/')
        )
    }

    /// Parsed base document. Fails when the configured pieces do not form a URL.
    pub fn base_url(&self) -> Result<Url, ComposeError> {
        let base = self.base_str();
        Url::parse(&base).map_err(|e| ComposeError::url_parse(&base, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let d = UrlDefaults::default();
        assert_eq!(d.scheme, "http");
        assert_eq!(d.host, "example.com");
        assert_eq!(d.path, "/");
        assert_eq!(d.base_str(), "http://example.com/");
    }

    #[test]
    fn base_str_joins_path_with_single_slash() {
        let d = UrlDefaults {
            scheme: "https".to_string(),
            host: "docs.example.org".to_string(),
            path: "/guide/".to_string(),
        };
        assert_eq!(d.base_str(), "https://docs.example.org/guide/");
        assert!(d.base_url().is_ok());
    }

    #[test]
    fn invalid_host_is_reported() {
        let d = UrlDefaults {
            host: String::new(),
            ..UrlDefaults::default()
        };
        assert!(matches!(
            d.base_url(),
            Err(ComposeError::UrlParse { .. })
        ));
    }
}
