//! URL modeling: split an href into normalized components and decorate them.
//!
//! Every component of a [`ParsedUrl`] is always present. Pieces the href does
//! not carry fall back to [`UrlDefaults`], and relative hrefs resolve against
//! the base those defaults describe.

mod decorate;
mod defaults;
mod key;
mod parse;

pub use defaults::UrlDefaults;
pub use key::ComponentKey;
pub use parse::parse_href;

/// The normalized decomposition of one href.
///
/// Built only by [`parse_href`]; values are trimmed and never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: String,
    user: String,
    pass: String,
    host: String,
    port: String,
    path: String,
    query: String,
    fragment: String,
}

impl ParsedUrl {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn pass(&self) -> &str {
        &self.pass
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port in decimal form, or `""` when the href names none (or names the
    /// scheme's default port).
    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Fragment without the leading `#`.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}
