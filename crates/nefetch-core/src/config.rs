use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::dataset::DEFAULT_BASE_URL;
use crate::fetch::FetchOptions;

/// Global configuration loaded from `~/.config/nefetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NefetchConfig {
    /// Remote base URL the dataset identifiers are joined onto.
    /// Defaults to the natural-earth-vector GitHub raw-content path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds. Generous: the province dataset
    /// is tens of MiB.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    300
}

impl Default for NefetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl NefetchConfig {
    /// Timeouts in the form the fetch layer consumes.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nefetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NefetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NefetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: NefetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
