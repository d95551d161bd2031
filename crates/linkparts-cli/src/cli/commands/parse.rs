//! `linkparts parse <href>` – show each normalized component.

use anyhow::Result;
use linkparts_core::config::LinkpartsConfig;
use linkparts_core::{Link, UrlComposer};

use super::composer_for;
use crate::cli::LinkArgs;

pub fn run_parse(args: &LinkArgs, cfg: &LinkpartsConfig) -> Result<()> {
    let composer = composer_for(args, cfg)?;
    print!("{}", render_components(&composer)?);
    Ok(())
}

/// One `name value` line per component, decorated composites last.
pub(crate) fn render_components(composer: &UrlComposer<Link>) -> Result<String> {
    let p = composer.parsed()?;
    let rows = [
        ("scheme", p.scheme().to_string()),
        ("user", p.user().to_string()),
        ("pass", p.pass().to_string()),
        ("host", p.host().to_string()),
        ("port", p.port().to_string()),
        ("path", p.path().to_string()),
        ("query", p.query().to_string()),
        ("fragment", p.fragment().to_string()),
        ("base", p.base()?),
        ("tail", p.tail()),
        ("next", p.next()?),
        ("uri", composer.uri().to_string()),
    ];
    let mut out = String::new();
    for (name, value) in rows {
        out.push_str(&format!("{:<10} {}\n", name, value));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_components_in_order() {
        let args = LinkArgs {
            href: "https://bob@example.org:8443/a?x=1#f".to_string(),
            document: Some("https://example.org/index.html".to_string()),
        };
        let composer = composer_for(&args, &LinkpartsConfig::default()).unwrap();
        let out = render_components(&composer).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "scheme     https");
        assert_eq!(lines[1], "user       bob");
        assert_eq!(lines[2], "pass       ");
        assert_eq!(lines[4], "port       8443");
        assert_eq!(lines[10], "next       https://bob@example.org:8443/a?x=1#f");
        assert_eq!(lines[11], "uri        https://bob@example.org:8443/a?x=1#f");
    }
}
