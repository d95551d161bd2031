//! Symbolic component keys accepted by `build`.

use std::fmt;
use std::str::FromStr;

use crate::error::ComposeError;

/// One accessor `build` can dispatch to.
///
/// Keys are matched ignoring ASCII case and underscores, so `host_and_port`,
/// `hostAndPort` and `hostandport` are the same key. A trailing `!` selects
/// the decorated variant (`query!` is [`ComponentKey::QueryDecorated`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKey {
    Scheme,
    SchemeDecorated,
    User,
    Pass,
    Auth,
    Host,
    HostAndPort,
    Port,
    PortDecorated,
    Path,
    PathDecorated,
    Query,
    QueryDecorated,
    Fragment,
    FragmentDecorated,
    Base,
    BaseDecorated,
    Tail,
    TailDecorated,
    Next,
    Href,
    Uri,
    RequestUri,
}

impl ComponentKey {
    /// Every key, in canonical order.
    pub const ALL: [ComponentKey; 23] = [
        ComponentKey::Scheme,
        ComponentKey::SchemeDecorated,
        ComponentKey::User,
        ComponentKey::Pass,
        ComponentKey::Auth,
        ComponentKey::Host,
        ComponentKey::HostAndPort,
        ComponentKey::Port,
        ComponentKey::PortDecorated,
        ComponentKey::Path,
        ComponentKey::PathDecorated,
        ComponentKey::Query,
        ComponentKey::QueryDecorated,
        ComponentKey::Fragment,
        ComponentKey::FragmentDecorated,
        ComponentKey::Base,
        ComponentKey::BaseDecorated,
        ComponentKey::Tail,
        ComponentKey::TailDecorated,
        ComponentKey::Next,
        ComponentKey::Href,
        ComponentKey::Uri,
        ComponentKey::RequestUri,
    ];

    /// Canonical spelling, as accepted by `build`.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKey::Scheme => "scheme",
            ComponentKey::SchemeDecorated => "scheme!",
            ComponentKey::User => "user",
            ComponentKey::Pass => "pass",
            ComponentKey::Auth => "auth",
            ComponentKey::Host => "host",
            ComponentKey::HostAndPort => "host_and_port",
            ComponentKey::Port => "port",
            ComponentKey::PortDecorated => "port!",
            ComponentKey::Path => "path",
            ComponentKey::PathDecorated => "path!",
            ComponentKey::Query => "query",
            ComponentKey::QueryDecorated => "query!",
            ComponentKey::Fragment => "fragment",
            ComponentKey::FragmentDecorated => "fragment!",
            ComponentKey::Base => "base",
            ComponentKey::BaseDecorated => "base!",
            ComponentKey::Tail => "tail",
            ComponentKey::TailDecorated => "tail!",
            ComponentKey::Next => "next",
            ComponentKey::Href => "href",
            ComponentKey::Uri => "uri",
            ComponentKey::RequestUri => "request_uri",
        }
    }
}

impl FromStr for ComponentKey {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (stem, decorated) = match s.strip_suffix('!') {
            Some(stem) => (stem, true),
            None => (s, false),
        };
        let stem: String = stem
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let key = match (stem.as_str(), decorated) {
            ("scheme", false) => ComponentKey::Scheme,
            ("scheme", true) => ComponentKey::SchemeDecorated,
            ("user", false) => ComponentKey::User,
            ("pass", false) => ComponentKey::Pass,
            ("auth", false) => ComponentKey::Auth,
            ("host", false) => ComponentKey::Host,
            ("host", true) | ("hostandport", false) => ComponentKey::HostAndPort,
            ("port", false) => ComponentKey::Port,
            ("port", true) => ComponentKey::PortDecorated,
            ("path", false) => ComponentKey::Path,
            ("path", true) => ComponentKey::PathDecorated,
            ("query", false) => ComponentKey::Query,
            ("query", true) => ComponentKey::QueryDecorated,
            ("fragment", false) => ComponentKey::Fragment,
            ("fragment", true) => ComponentKey::FragmentDecorated,
            ("base", false) => ComponentKey::Base,
            ("base", true) => ComponentKey::BaseDecorated,
            ("tail", false) => ComponentKey::Tail,
            ("tail", true) => ComponentKey::TailDecorated,
            ("next", false) => ComponentKey::Next,
            ("href", false) => ComponentKey::Href,
            ("uri", false) => ComponentKey::Uri,
            ("requesturi", false) => ComponentKey::RequestUri,
            _ => return Err(ComposeError::UnknownComponent(s.to_string())),
        };
        Ok(key)
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bang_selects_decorated_variant() {
        assert_eq!("scheme!".parse::<ComponentKey>(), Ok(ComponentKey::SchemeDecorated));
        assert_eq!("query!".parse::<ComponentKey>(), Ok(ComponentKey::QueryDecorated));
        assert_eq!("host!".parse::<ComponentKey>(), Ok(ComponentKey::HostAndPort));
        assert_eq!("scheme".parse::<ComponentKey>(), Ok(ComponentKey::Scheme));
    }

    #[test]
    fn case_and_underscores_are_ignored() {
        assert_eq!("host_and_port".parse::<ComponentKey>(), Ok(ComponentKey::HostAndPort));
        assert_eq!("hostAndPort".parse::<ComponentKey>(), Ok(ComponentKey::HostAndPort));
        assert_eq!("RequestUri".parse::<ComponentKey>(), Ok(ComponentKey::RequestUri));
        assert_eq!("Path!".parse::<ComponentKey>(), Ok(ComponentKey::PathDecorated));
    }

    #[test]
    fn unknown_keys_are_named_verbatim() {
        for bad in ["unknownkey", "user!", "next!", "", "!", "query!!"] {
            assert_eq!(
                bad.parse::<ComponentKey>(),
                Err(ComposeError::UnknownComponent(bad.to_string()))
            );
        }
    }

    #[test]
    fn canonical_names_cover_every_key() {
        for key in ComponentKey::ALL {
            assert_eq!(key.to_string().parse::<ComponentKey>(), Ok(key));
        }
    }
}
