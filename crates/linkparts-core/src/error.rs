//! Error types for href parsing and URL composition.

use thiserror::Error;

/// Errors reported by [`crate::composer::UrlComposer`] and the parser behind it.
///
/// All variants are deterministic input-validation failures; none are worth
/// retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The href could not be split into URL components.
    #[error("cannot parse href {href:?} as a URL: {reason}")]
    UrlParse { href: String, reason: String },

    /// A password was present without a username.
    #[error("a credential pair cannot have a password with no username")]
    InvalidAuth,

    /// `build` received a key that names no known component.
    #[error("unknown URL component key `{0}`")]
    UnknownComponent(String),
}

impl ComposeError {
    pub(crate) fn url_parse(href: &str, err: url::ParseError) -> Self {
        ComposeError::UrlParse {
            href: href.to_string(),
            reason: err.to_string(),
        }
    }
}
