//! `linkparts next <href>` – print the rewritten absolute URL.

use anyhow::Result;
use linkparts_core::config::LinkpartsConfig;

use super::composer_for;
use crate::cli::LinkArgs;

pub fn run_next(args: &LinkArgs, cfg: &LinkpartsConfig) -> Result<()> {
    let composer = composer_for(args, cfg)?;
    println!("{}", composer.next()?);
    Ok(())
}
