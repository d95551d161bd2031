use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::UrlDefaults;

fn default_keys() -> Vec<String> {
    vec!["next".to_string()]
}

/// Global configuration loaded from `~/.config/linkparts/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkpartsConfig {
    /// Keys `linkparts build` composes when none are given on the command line.
    #[serde(default = "default_keys")]
    pub default_keys: Vec<String>,
    /// Scheme, host and path used for hrefs that leave them out.
    #[serde(default)]
    pub defaults: UrlDefaults,
}

impl Default for LinkpartsConfig {
    fn default() -> Self {
        Self {
            default_keys: default_keys(),
            defaults: UrlDefaults::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkparts")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkpartsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkpartsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<LinkpartsConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: LinkpartsConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    cfg.defaults
        .base_url()
        .with_context(|| format!("invalid [defaults] in {}", path.display()))?;
    Ok(cfg)
}
