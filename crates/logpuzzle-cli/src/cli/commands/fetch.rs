//! `--todir` mode: download every image, then write the index page.

use anyhow::Result;
use logpuzzle_core::config::HttpConfig;
use logpuzzle_core::fetch::{download_with, CurlFetcher};
use std::path::Path;

pub fn run_fetch(urls: &[String], dest_dir: &Path, http: &HttpConfig) -> Result<()> {
    let fetcher = CurlFetcher::from_config(http);
    download_with(&fetcher, urls, dest_dir)?;
    tracing::info!("downloaded {} image(s) into {}", urls.len(), dest_dir.display());
    Ok(())
}
