use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::transport::FetchOptions;

/// Directory (relative to the working directory) that receives saved pages.
pub const DEFAULT_OUTPUT_DIR: &str = "downloaded_pages";
/// Whole-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_REDIRECTS: u32 = 5;
/// 64 MiB.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

const DEFAULT_URL: &str = "https://example.com/";

/// Configuration loaded from `~/.config/pagegrab/config.toml`.
///
/// Only `url` matters for most runs; every other key falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGrabConfig {
    /// Absolute http:// or https:// URL of the page to fetch.
    pub url: String,
    /// Directory that receives `page_<timestamp>.html`; created if missing.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Seconds before the in-flight request is aborted.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Redirect hops to follow; 0 turns redirect following off.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,
    /// Upper bound on the buffered body; 0 means no cap.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_redirects() -> u32 {
    DEFAULT_MAX_REDIRECTS
}

fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for PageGrabConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output_dir: default_output_dir(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl PageGrabConfig {
    /// Transport settings for the single GET.
    ///
    /// A `timeout_secs` of 0 falls back to the default; libcurl would read it as "no timeout".
    pub fn fetch_options(&self) -> FetchOptions {
        let timeout_secs = if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout_secs
        };
        FetchOptions {
            timeout: Duration::from_secs(timeout_secs),
            max_redirects: self.max_redirects,
            max_body_bytes: (self.max_body_bytes > 0).then_some(self.max_body_bytes),
        }
    }

    /// Reject values that would let a stalled server hang the run.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<PageGrabConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PageGrabConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the default location, creating a default file if none exists.
pub fn load_or_init() -> Result<PageGrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PageGrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}
