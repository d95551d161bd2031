//! Decorated accessors and composites.
//!
//! A decorated value carries its separator (`://`, `:`, `/`, `?`, `#`) and
//! collapses to `""` when the component is absent, so concatenating
//! decorated pieces never leaves dangling punctuation.

use super::ParsedUrl;
use crate::error::ComposeError;

impl ParsedUrl {
    /// `user` alone, or `user:pass`. A password without a user is an error.
    pub fn auth(&self) -> Result<String, ComposeError> {
        match (self.user(), self.pass()) {
            ("", pass) if !pass.is_empty() => Err(ComposeError::InvalidAuth),
            (user, "") => Ok(user.to_string()),
            (user, pass) => Ok(format!("{user}:{pass}")),
        }
    }

    /// `scheme://`, or `scheme:` for `mailto`.
    pub fn scheme_decorated(&self) -> String {
        let scheme = self.scheme();
        let decorated = if scheme.eq_ignore_ascii_case("mailto") {
            format!("{scheme}:")
        } else {
            format!("{scheme}://")
        };
        if decorated == "://" {
            String::new()
        } else {
            decorated
        }
    }

    pub fn port_decorated(&self) -> String {
        decorate(":", self.port())
    }

    /// Path with exactly one leading slash; `""` for the root path.
    pub fn path_decorated(&self) -> String {
        let path = format!("/{}", self.path().trim_start_matches('/'));
        if path == "/" {
            String::new()
        } else {
            path
        }
    }

    pub fn query_decorated(&self) -> String {
        decorate("?", self.query().trim_start_matches('?'))
    }

    pub fn fragment_decorated(&self) -> String {
        decorate("#", self.fragment().trim_start_matches('#'))
    }

    pub fn host_and_port(&self) -> String {
        format!("{}{}", self.host(), self.port_decorated())
    }

    /// Scheme and authority, e.g. `https://user:pw@example.org:8443`.
    ///
    /// The `@` is dropped when there are no credentials, and a single
    /// trailing slash is removed.
    pub fn base(&self) -> Result<String, ComposeError> {
        let auth_host = format!("{}@{}", self.auth()?, self.host_and_port());
        let base = format!("{}{}", self.scheme_decorated(), auth_host.trim_matches('@'));
        Ok(match base.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => base,
        })
    }

    pub fn base_decorated(&self) -> Result<String, ComposeError> {
        let base = self.base()?;
        Ok(if base.is_empty() {
            base
        } else {
            format!("{base}/")
        })
    }

    /// Raw path followed by the decorated query and fragment.
    pub fn tail(&self) -> String {
        format!(
            "{}{}{}",
            self.path(),
            self.query_decorated(),
            self.fragment_decorated()
        )
    }

    pub fn tail_decorated(&self) -> String {
        format!(
            "{}{}{}",
            self.path_decorated(),
            self.query_decorated(),
            self.fragment_decorated()
        )
    }

    /// The absolute URL rebuilt from the normalized components.
    ///
    /// Same as `base() + tail_decorated()`, except that the root path is
    /// written as `/` so the result is always a complete URL.
    pub fn next(&self) -> Result<String, ComposeError> {
        let path = self.path_decorated();
        let path = if path.is_empty() { "/" } else { path.as_str() };
        Ok(format!(
            "{}{}{}{}",
            self.base()?,
            path,
            self.query_decorated(),
            self.fragment_decorated()
        ))
    }
}

fn decorate(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}
