use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::AssetCategory;
use crate::filename::DEFAULT_FILENAME;
use crate::request::HttpMethod;
use crate::trigger::TriggerSettings;

/// Global configuration loaded from `~/.config/histdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistdlConfig {
    /// Export endpoint the form is submitted to.
    pub endpoint: String,
    /// Form method ("post" or "get").
    #[serde(default)]
    pub method: HttpMethod,
    /// Saved when the response carries no usable Content-Disposition filename.
    #[serde(default = "default_fallback_filename")]
    pub fallback_filename: String,
    /// Longest accepted date range in days (0 = unlimited). The export server rejects more than 30.
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
    /// Asset category preselected in the form.
    #[serde(default)]
    pub default_asset: AssetCategory,
    /// Directory downloads are saved to (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Replace existing files instead of saving as `name (n).ext`.
    #[serde(default)]
    pub overwrite: bool,
    /// Optional User-Agent override.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_fallback_filename() -> String {
    DEFAULT_FILENAME.to_string()
}

fn default_max_range_days() -> u32 {
    30
}

impl Default for HistdlConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/download".to_string(),
            method: HttpMethod::Post,
            fallback_filename: default_fallback_filename(),
            max_range_days: default_max_range_days(),
            default_asset: AssetCategory::Forex,
            download_dir: None,
            overwrite: false,
            user_agent: None,
        }
    }
}

impl HistdlConfig {
    /// Trigger settings for this config; `download_dir` falls back to `cwd`.
    pub fn trigger_settings(&self, cwd: &Path) -> TriggerSettings {
        TriggerSettings {
            endpoint: self.endpoint.clone(),
            method: self.method,
            download_dir: self.download_dir.clone().unwrap_or_else(|| cwd.to_path_buf()),
            fallback_filename: self.fallback_filename.clone(),
            overwrite: self.overwrite,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("histdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HistdlConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<HistdlConfig> {
    if !path.exists() {
        let default_cfg = HistdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: HistdlConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
