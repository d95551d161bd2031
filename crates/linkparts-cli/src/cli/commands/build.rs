//! `linkparts build <href> [keys...]` – concatenate components by key.

use anyhow::Result;
use linkparts_core::config::LinkpartsConfig;

use super::composer_for;
use crate::cli::LinkArgs;

pub fn run_build(args: &LinkArgs, keys: &[String], cfg: &LinkpartsConfig) -> Result<()> {
    let keys: &[String] = if keys.is_empty() {
        &cfg.default_keys
    } else {
        keys
    };
    let composer = composer_for(args, cfg)?;
    println!("{}", composer.build(keys)?);
    Ok(())
}
