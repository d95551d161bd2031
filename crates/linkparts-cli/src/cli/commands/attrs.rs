//! `linkparts attrs <href>` – print the attribute snapshot as JSON.

use anyhow::Result;
use linkparts_core::config::LinkpartsConfig;

use super::composer_for;
use crate::cli::LinkArgs;

pub fn run_attrs(args: &LinkArgs, pretty: bool, cfg: &LinkpartsConfig) -> Result<()> {
    let attrs = composer_for(args, cfg)?.attributes()?;
    let json = if pretty {
        serde_json::to_string_pretty(&attrs)?
    } else {
        serde_json::to_string(&attrs)?
    };
    println!("{json}");
    Ok(())
}
