//! Integration test: behavior of `UrlComposer` across many hrefs.

use linkparts_core::{AnchorNode, ComposeError, Link, UrlComposer};

fn composer(href: &str) -> UrlComposer<Link> {
    UrlComposer::new(Link::new(AnchorNode::with_href(href), "https://example.org/page"))
}

const SCHEMELESS: &[&str] = &["", "/", "/a/b", "a/b", "?q=1", "#top", "//cdn.example.net/x"];

#[test]
fn schemeless_hrefs_default_to_http() {
    for href in SCHEMELESS {
        assert_eq!(composer(href).scheme().unwrap(), "http", "href {href:?}");
    }
}

#[test]
fn hostless_hrefs_default_to_example_com() {
    for href in ["", "/a/b", "a/b", "?q=1", "#top", "mailto:x@example.net", "urn:isbn:0451450523"] {
        assert_eq!(composer(href).host().unwrap(), "example.com", "href {href:?}");
    }
}

#[test]
fn password_without_user_always_fails_auth() {
    for href in [
        "http://:pw@example.org/",
        "https://:secret@example.org:8443/a?b#c",
        "ftp://:x@files.example.org/",
    ] {
        let c = composer(href);
        assert_eq!(c.user().unwrap(), "");
        assert!(!c.pass().unwrap().is_empty());
        assert_eq!(c.auth(), Err(ComposeError::InvalidAuth), "href {href:?}");
        assert_eq!(c.next(), Err(ComposeError::InvalidAuth));
    }
}

#[test]
fn path_decorated_is_empty_exactly_for_root() {
    for href in ["", "/", "https://example.org", "/a", "/a/", "https://example.org/x/y"] {
        let c = composer(href);
        let root = c.path().unwrap() == "/";
        assert_eq!(c.path_decorated().unwrap().is_empty(), root, "href {href:?}");
    }
}

#[test]
fn next_reparses_to_the_same_components() {
    for href in [
        "https://example.org/x",
        "http://bob:pw@example.org:8080/a/b/?x=1&y=2#frag",
        "https://example.org/?only=query",
        "https://example.org/#only-fragment",
        "https://example.org:443/explicit-default-port",
        "/relative/path?x",
    ] {
        let first = composer(href);
        let next = first.next().unwrap();
        let second = composer(&next);
        assert_eq!(first.parsed().unwrap(), second.parsed().unwrap(), "href {href:?}");
        assert_eq!(second.next().unwrap(), next);
    }
}

#[test]
fn documented_build_examples() {
    assert_eq!(
        composer("https://example.org/x").build(["scheme!", "host"]).unwrap(),
        "https://example.org"
    );
    assert_eq!(
        composer("/a/b?x=1").build(["path!", "query!"]).unwrap(),
        "/a/b?x=1"
    );
    assert_eq!(
        composer("/a/b?x=1").build(["unknownkey"]),
        Err(ComposeError::UnknownComponent("unknownkey".to_string()))
    );
}

#[test]
fn empty_href_rewrites_to_default_root() {
    assert_eq!(composer("").next().unwrap(), "http://example.com/");
}

#[test]
fn repeated_calls_return_identical_values() {
    let c = composer("https://bob@example.org:8443/p?q#f");
    let first: Vec<String> = ["scheme!", "auth", "host!", "tail", "next", "base!"]
        .iter()
        .map(|k| c.build([*k]).unwrap())
        .collect();
    for _ in 0..5 {
        let again: Vec<String> = ["scheme!", "auth", "host!", "tail", "next", "base!"]
            .iter()
            .map(|k| c.build([*k]).unwrap())
            .collect();
        assert_eq!(again, first);
    }
}

#[test]
fn mailto_keeps_single_colon() {
    let c = composer("mailto:someone@example.net");
    assert_eq!(c.build(["scheme!", "path"]).unwrap(), "mailto:someone@example.net");
}
