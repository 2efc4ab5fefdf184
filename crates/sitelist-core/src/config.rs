use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::FileTrim;

/// How parsed lists are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One site per line.
    #[default]
    Plain,
    Json,
}

/// Global configuration loaded from `~/.config/sitelist/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitelistConfig {
    /// Normalization of entries parsed from uploaded files: "preserve" (default) or "trim".
    #[serde(default)]
    pub file_trim: FileTrim,
    /// Default output format: "plain" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
    /// Optional JSON product catalog used to resolve supported bundle sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_path: Option<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitelist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitelistConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<SitelistConfig> {
    if !path.exists() {
        let default_cfg = SitelistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SitelistConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
