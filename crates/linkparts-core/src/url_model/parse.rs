//! Split an href into a [`ParsedUrl`].

use url::Url;

use super::{ParsedUrl, UrlDefaults};
use crate::error::ComposeError;

/// Parses `href` into trimmed components, filling gaps from `defaults`.
///
/// Absolute hrefs are split as-is. Relative, scheme-relative and empty hrefs
/// are resolved against the base document `defaults` describe, so `"/a?b"`
/// picks up the default scheme and host. Hrefs the splitter rejects (e.g.
/// `"http://"` or an out-of-range port) fail with [`ComposeError::UrlParse`].
pub fn parse_href(href: &str, defaults: &UrlDefaults) -> Result<ParsedUrl, ComposeError> {
    let base = defaults.base_url()?;
    let url = Url::options()
        .base_url(Some(&base))
        .parse(href)
        .map_err(|e| {
            tracing::warn!(href, error = %e, "href is not a valid URL");
            ComposeError::url_parse(href, e)
        })?;

    let parsed = ParsedUrl {
        scheme: or_default(url.scheme(), &defaults.scheme),
        user: url.username().trim().to_string(),
        pass: url.password().unwrap_or_default().trim().to_string(),
        host: or_default(url.host_str().unwrap_or_default(), &defaults.host),
        port: explicit_port(&url, href)
            .map(|p| p.to_string())
            .unwrap_or_default(),
        path: or_default(url.path(), &defaults.path),
        query: url.query().unwrap_or_default().trim().to_string(),
        fragment: url.fragment().unwrap_or_default().trim().to_string(),
    };
    tracing::debug!(href, base = %base, ?parsed, "parsed href");
    Ok(parsed)
}

/// Port written in the href, including one equal to the scheme default,
/// which `Url::port` leaves out.
fn explicit_port(url: &Url, href: &str) -> Option<u16> {
    url.port().or_else(|| {
        if authority_has_port(href) {
            url.port_or_known_default()
        } else {
            None
        }
    })
}

/// True when the href carries an authority ending in `:<digits>`.
fn authority_has_port(href: &str) -> bool {
    let href = href.trim();
    let Some((prefix, rest)) = href.split_once("//") else {
        return false;
    };
    if !is_scheme_prefix(prefix) {
        return false;
    }
    let authority = rest
        .split(['/', '?', '#', '\\'])
        .next()
        .unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    // IPv6 literals carry colons inside the brackets.
    let host_port = host_port
        .rsplit_once(']')
        .map_or(host_port, |(_, after)| after);
    match host_port.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// `""` (scheme-relative) or `scheme:`.
fn is_scheme_prefix(prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    let Some(scheme) = prefix.strip_suffix(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.trim().to_string()
    } else {
        value.to_string()
    }
}
