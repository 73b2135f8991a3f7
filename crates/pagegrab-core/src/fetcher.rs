//! Fetch one page and persist it as `page_<timestamp>.html`.
//!
//! Strict ordering per run: validate URL, create output dir, GET, write, report.
//! Exactly one file is written on success and none on failure.

use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::config::PageGrabConfig;
use crate::error::FetchError;
use crate::naming;
use crate::transport::{self, FetchOptions};
use crate::url_model;

/// The artifact produced by a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPage {
    /// Path written: `output_dir` joined with the generated filename.
    pub path: PathBuf,
    /// URL as configured (before redirects).
    pub url: String,
    /// Bytes written to disk.
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the written content.
    pub sha256: String,
}

#[derive(Debug, Clone, Default)]
pub struct PageFetcher {
    options: FetchOptions,
}

impl PageFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    pub fn from_config(cfg: &PageGrabConfig) -> Self {
        Self::new(cfg.fetch_options())
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetches `url` once and writes the body under `output_dir`.
    ///
    /// Non-http(s) and malformed URLs fail before the directory is touched or a
    /// socket is opened. The output directory is created if missing.
    pub async fn fetch_and_save(
        &self,
        url: &str,
        output_dir: &Path,
    ) -> Result<SavedPage, FetchError> {
        let target = url_model::parse_target(url)?;
        tracing::info!(
            url = %target.url,
            transport = %target.transport,
            timeout_ms = self.options.timeout.as_millis() as u64,
            "fetching page"
        );

        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| FetchError::Write {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let path = naming::artifact_path(output_dir, Utc::now());

        let body = tokio::task::spawn_blocking({
            let target = target.clone();
            let options = self.options;
            move || transport::get_page(&target, &options)
        })
        .await
        .map_err(|e| FetchError::Aborted(e.to_string()))??;

        let text = String::from_utf8(body).unwrap_or_else(|e| {
            tracing::warn!("response body is not valid UTF-8; replacing invalid sequences");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        });

        tokio::fs::write(&path, text.as_bytes())
            .await
            .map_err(|source| FetchError::Write {
                path: path.clone(),
                source,
            })?;

        let saved = SavedPage {
            path,
            url: url.to_string(),
            bytes: text.len() as u64,
            sha256: checksum::sha256_hex(text.as_bytes()),
        };
        tracing::info!(
            path = %saved.path.display(),
            bytes = saved.bytes,
            sha256 = %saved.sha256,
            "page saved"
        );
        Ok(saved)
    }
}

/// Fetches `url` into `output_dir` with default transport settings
/// (10 s timeout, up to 5 redirects, 64 MiB body cap).
pub async fn fetch_and_save(url: &str, output_dir: &Path) -> Result<SavedPage, FetchError> {
    PageFetcher::default().fetch_and_save(url, output_dir).await
}

/// Runs one fetch for `cfg` and reports the outcome on the console.
///
/// Never fails: errors are printed and logged, and `None` is returned.
pub async fn run_once(cfg: &PageGrabConfig) -> Option<PathBuf> {
    println!("Starting page download...");
    println!("Target URL: {}", cfg.url);

    let fetcher = PageFetcher::from_config(cfg);
    match fetcher.fetch_and_save(&cfg.url, &cfg.output_dir).await {
        Ok(saved) => {
            println!("Download complete.");
            println!("Saved to: {}", saved.path.display());
            Some(saved.path)
        }
        Err(err) => {
            tracing::warn!(url = %cfg.url, "download failed: {}", err);
            eprintln!("download failed: {}", err);
            None
        }
    }
}
