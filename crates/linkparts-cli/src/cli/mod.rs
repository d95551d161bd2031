//! CLI for the linkparts href decomposer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linkparts_core::config::{self, LinkpartsConfig};
use std::path::PathBuf;

use commands::{run_attrs, run_build, run_next, run_parse};

/// Top-level CLI for linkparts.
#[derive(Debug, Parser)]
#[command(name = "linkparts")]
#[command(about = "linkparts: split hrefs into URL components and recompose them")]
#[command(long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/linkparts/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// The href to work on and the page it was found on.
#[derive(Debug, Clone, Args)]
pub struct LinkArgs {
    /// Raw href attribute value (may be relative or empty).
    pub href: String,

    /// URI of the document containing the link; used to compute the request URI.
    /// Defaults to the configured base document.
    #[arg(long, value_name = "URI")]
    pub document: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every normalized component of an href.
    Parse {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Concatenate components by key, e.g. `build /a?x=1 'path!' 'query!'`.
    Build {
        #[command(flatten)]
        link: LinkArgs,

        /// Component keys; a trailing `!` selects the decorated form.
        /// Uses `default_keys` from the config when omitted.
        keys: Vec<String>,
    },

    /// Print the href rewritten as a complete absolute URL.
    Next {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Print the link's attribute snapshot as JSON.
    Attrs {
        #[command(flatten)]
        link: LinkArgs,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(&cfg)
    }

    pub fn run(self, cfg: &LinkpartsConfig) -> Result<()> {
        match self {
            CliCommand::Parse { link } => run_parse(&link, cfg),
            CliCommand::Build { link, keys } => run_build(&link, &keys, cfg),
            CliCommand::Next { link } => run_next(&link, cfg),
            CliCommand::Attrs { link, pretty } => run_attrs(&link, pretty, cfg),
        }
    }
}
