//! Integration test: loading configuration from an explicit file.

use linkparts_core::config;
use linkparts_core::{AnchorNode, Link, UrlComposer};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn configured_defaults_feed_the_composer() {
    let f = write_config(
        r#"
        default_keys = ["base!"]

        [defaults]
        scheme = "https"
        host = "docs.example.org"
        path = "/guide/"
        "#,
    );
    let cfg = config::load_from(f.path()).unwrap();
    assert_eq!(cfg.default_keys, vec!["base!"]);

    let link = Link::new(
        AnchorNode::with_href("setup.html?v=2"),
        "https://docs.example.org/guide/setup.html?v=2",
    );
    let c = UrlComposer::with_defaults(link, cfg.defaults.clone()).unwrap();
    assert_eq!(c.build(&cfg.default_keys).unwrap(), "https://docs.example.org/");
    assert_eq!(c.next().unwrap(), "https://docs.example.org/guide/setup.html?v=2");
}

#[test]
fn invalid_defaults_are_rejected() {
    let f = write_config(
        r#"
        [defaults]
        host = ""
        "#,
    );
    let err = config::load_from(f.path()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid [defaults]"), "{err:#}");
}

#[test]
fn malformed_toml_is_rejected() {
    let f = write_config("default_keys = [");
    assert!(config::load_from(f.path()).is_err());
}
