//! CLI command handlers, one file per subcommand.

mod attrs;
mod build;
mod next;
mod parse;

pub use attrs::run_attrs;
pub use build::run_build;
pub use next::run_next;
pub use parse::run_parse;

use anyhow::{Context, Result};
use linkparts_core::config::LinkpartsConfig;
use linkparts_core::{Link, UrlComposer};

use super::LinkArgs;

/// Composer for the href on the command line, resolved against `--document`
/// or the configured base document.
pub(crate) fn composer_for(args: &LinkArgs, cfg: &LinkpartsConfig) -> Result<UrlComposer<Link>> {
    let document = args
        .document
        .clone()
        .unwrap_or_else(|| cfg.defaults.base_str());
    let link = Link::resolve(&args.href, &document)
        .with_context(|| format!("resolve href {:?} against {document}", args.href))?;
    UrlComposer::with_defaults(link, cfg.defaults.clone())
        .context("invalid [defaults] in config")
}
