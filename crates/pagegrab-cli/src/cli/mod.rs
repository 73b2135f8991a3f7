//! CLI for pagegrab: fetch the configured page once.

use anyhow::Result;
use clap::Parser;
use pagegrab_core::config::{self, PageGrabConfig};
use pagegrab_core::fetcher;
use std::path::PathBuf;

/// Fetch the configured page once and save it as `page_<timestamp>.html`.
#[derive(Debug, Parser)]
#[command(name = "pagegrab", version)]
#[command(about = "Fetch one HTML page and save it with a timestamped filename", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/pagegrab/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn load_config(&self) -> Result<PageGrabConfig> {
        match &self.config {
            Some(path) => config::load_from_path(path),
            None => config::load_or_init(),
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        fetcher::run_once(&cfg).await;
        Ok(())
    }
}
