//! Link sources: where a composer gets its href and resolved URI from.
//!
//! The composer only depends on [`LinkSource`] and does not know about any
//! DOM library. [`Link`] is a small standalone implementation for callers
//! that have an href and the URI of the page it came from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ComposeError;

/// Anything that can describe one hyperlink.
pub trait LinkSource {
    /// Opaque handle to the element the link came from.
    type Node;

    fn node(&self) -> &Self::Node;

    /// Raw href attribute value, `""` when the element has none.
    fn href(&self) -> &str;

    /// The link's absolute URI, already resolved by the caller.
    fn resolved_uri(&self) -> &str;
}

/// Attributes of an anchor-like element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorNode {
    pub attributes: BTreeMap<String, String>,
}

impl AnchorNode {
    pub fn with_href(href: impl Into<String>) -> Self {
        let mut node = Self::default();
        node.attributes.insert("href".to_string(), href.into());
        node
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A link held in memory: an anchor node plus its resolved URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    node: AnchorNode,
    uri: String,
}

impl Link {
    pub fn new(node: AnchorNode, uri: impl Into<String>) -> Self {
        Self {
            node,
            uri: uri.into(),
        }
    }

    /// Builds a link for `href` found on the page at `document_uri`.
    ///
    /// The resolved URI is `href` joined onto `document_uri`; an empty href
    /// resolves to the document itself.
    pub fn resolve(href: &str, document_uri: &str) -> Result<Self, ComposeError> {
        let document =
            Url::parse(document_uri).map_err(|e| ComposeError::url_parse(document_uri, e))?;
        let resolved = document
            .join(href)
            .map_err(|e| ComposeError::url_parse(href, e))?;
        Ok(Self::new(AnchorNode::with_href(href), resolved.as_str()))
    }
}

impl LinkSource for Link {
    type Node = AnchorNode;

    fn node(&self) -> &AnchorNode {
        &self.node
    }

    fn href(&self) -> &str {
        self.node.attribute("href").unwrap_or_default()
    }

    fn resolved_uri(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_href_onto_document() {
        let link = Link::resolve("../img/logo.png?v=2", "https://example.org/docs/guide/").unwrap();
        assert_eq!(link.href(), "../img/logo.png?v=2");
        assert_eq!(
            link.resolved_uri(),
            "https://example.org/docs/img/logo.png?v=2"
        );
    }

    #[test]
    fn missing_href_attribute_reads_as_empty() {
        let link = Link::new(AnchorNode::default(), "https://example.org/");
        assert_eq!(link.href(), "");
        assert_eq!(link.node().attribute("href"), None);
    }

    #[test]
    fn resolve_rejects_relative_document() {
        assert!(matches!(
            Link::resolve("/a", "not a url"),
            Err(ComposeError::UrlParse { .. })
        ));
    }
}
