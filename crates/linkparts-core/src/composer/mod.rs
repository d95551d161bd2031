//! `UrlComposer`: lazily parses one link's href and recomposes its parts.
//!
//! ```
//! use linkparts_core::{Link, UrlComposer};
//!
//! let link = Link::resolve("/a/b?x=1", "https://example.org/")?;
//! let composer = UrlComposer::new(link);
//! assert_eq!(composer.build(["path!", "query!"])?, "/a/b?x=1");
//! assert_eq!(composer.next()?, "http://example.com/a/b?x=1");
//! # Ok::<(), linkparts_core::ComposeError>(())
//! ```

mod attributes;

use std::sync::OnceLock;

use crate::error::ComposeError;
use crate::link::LinkSource;
use crate::url_model::{parse_href, ComponentKey, ParsedUrl, UrlDefaults};

pub use attributes::LinkAttributes;

/// Wraps one [`LinkSource`] and exposes its href as URL components.
///
/// The href is parsed on first access and the result (success or failure) is
/// cached until [`UrlComposer::set_link`] swaps the source.
#[derive(Debug)]
pub struct UrlComposer<L> {
    link: L,
    defaults: UrlDefaults,
    parsed: OnceLock<Result<ParsedUrl, ComposeError>>,
}

impl<L: LinkSource> UrlComposer<L> {
    pub fn new(link: L) -> Self {
        Self {
            link,
            defaults: UrlDefaults::default(),
            parsed: OnceLock::new(),
        }
    }

    /// Composer whose hrefs fall back to (and resolve against) `defaults`.
    ///
    /// Fails with [`ComposeError::UrlParse`] when `defaults` do not form a
    /// base URL, so later accessor errors always name the href.
    pub fn with_defaults(link: L, defaults: UrlDefaults) -> Result<Self, ComposeError> {
        defaults.base_url()?;
        Ok(Self {
            link,
            defaults,
            parsed: OnceLock::new(),
        })
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    /// Replaces the wrapped link and drops the cached parse.
    pub fn set_link(&mut self, link: L) {
        self.link = link;
        self.parsed = OnceLock::new();
        tracing::debug!(href = self.link.href(), "link replaced, parse cache cleared");
    }

    pub fn into_link(self) -> L {
        self.link
    }

    pub fn defaults(&self) -> &UrlDefaults {
        &self.defaults
    }

    /// The normalized components of the wrapped href, parsed at most once.
    pub fn parsed(&self) -> Result<&ParsedUrl, ComposeError> {
        self.parsed
            .get_or_init(|| parse_href(self.link.href(), &self.defaults))
            .as_ref()
            .map_err(|e| e.clone())
    }

    pub fn node(&self) -> &L::Node {
        self.link.node()
    }

    pub fn href(&self) -> &str {
        self.link.href()
    }

    pub fn uri(&self) -> &str {
        self.link.resolved_uri()
    }

    /// Alias of [`UrlComposer::uri`].
    pub fn request_uri(&self) -> &str {
        self.uri()
    }

    pub fn scheme(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.scheme())
    }

    pub fn user(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.user())
    }

    pub fn pass(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.pass())
    }

    pub fn host(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.host())
    }

    pub fn port(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.port())
    }

    pub fn path(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.path())
    }

    pub fn query(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.query())
    }

    pub fn fragment(&self) -> Result<&str, ComposeError> {
        Ok(self.parsed()?.fragment())
    }

    pub fn auth(&self) -> Result<String, ComposeError> {
        self.parsed()?.auth()
    }

    pub fn scheme_decorated(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.scheme_decorated())
    }

    pub fn port_decorated(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.port_decorated())
    }

    pub fn path_decorated(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.path_decorated())
    }

    pub fn query_decorated(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.query_decorated())
    }

    pub fn fragment_decorated(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.fragment_decorated())
    }

    pub fn host_and_port(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.host_and_port())
    }

    pub fn base(&self) -> Result<String, ComposeError> {
        self.parsed()?.base()
    }

    pub fn base_decorated(&self) -> Result<String, ComposeError> {
        self.parsed()?.base_decorated()
    }

    pub fn tail(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.tail())
    }

    pub fn tail_decorated(&self) -> Result<String, ComposeError> {
        Ok(self.parsed()?.tail_decorated())
    }

    /// The href rewritten as a complete absolute URL.
    pub fn next(&self) -> Result<String, ComposeError> {
        self.parsed()?.next()
    }

    /// Value of a single component.
    pub fn component(&self, key: ComponentKey) -> Result<String, ComposeError> {
        let value = match key {
            ComponentKey::Href => return Ok(self.href().to_string()),
            ComponentKey::Uri | ComponentKey::RequestUri => return Ok(self.uri().to_string()),
            ComponentKey::Scheme => self.scheme()?.to_string(),
            ComponentKey::SchemeDecorated => self.scheme_decorated()?,
            ComponentKey::User => self.user()?.to_string(),
            ComponentKey::Pass => self.pass()?.to_string(),
            ComponentKey::Auth => self.auth()?,
            ComponentKey::Host => self.host()?.to_string(),
            ComponentKey::HostAndPort => self.host_and_port()?,
            ComponentKey::Port => self.port()?.to_string(),
            ComponentKey::PortDecorated => self.port_decorated()?,
            ComponentKey::Path => self.path()?.to_string(),
            ComponentKey::PathDecorated => self.path_decorated()?,
            ComponentKey::Query => self.query()?.to_string(),
            ComponentKey::QueryDecorated => self.query_decorated()?,
            ComponentKey::Fragment => self.fragment()?.to_string(),
            ComponentKey::FragmentDecorated => self.fragment_decorated()?,
            ComponentKey::Base => self.base()?,
            ComponentKey::BaseDecorated => self.base_decorated()?,
            ComponentKey::Tail => self.tail()?,
            ComponentKey::TailDecorated => self.tail_decorated()?,
            ComponentKey::Next => self.next()?,
        };
        Ok(value)
    }

    /// Concatenates the components named by `keys`, in order.
    ///
    /// Every key is resolved before any component is computed, so an unknown
    /// key fails with [`ComposeError::UnknownComponent`] regardless of the
    /// href. No separators are inserted; use the `!` (decorated) keys for
    /// punctuation.
    pub fn build<I, S>(&self, keys: I) -> Result<String, ComposeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = keys
            .into_iter()
            .map(|k| k.as_ref().parse::<ComponentKey>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = String::new();
        for key in keys {
            out.push_str(&self.component(key)?);
        }
        Ok(out)
    }
}

impl<L> UrlComposer<L>
where
    L: LinkSource,
    L::Node: Clone,
{
    /// Snapshot of the link's request URI, node, href, base, path and next URL.
    pub fn attributes(&self) -> Result<LinkAttributes<L::Node>, ComposeError> {
        Ok(LinkAttributes {
            request_uri: self.request_uri().to_string(),
            node: self.node().clone(),
            href: self.href().to_string(),
            base: self.base()?,
            path: self.path()?.to_string(),
            next: self.next()?,
        })
    }
}
