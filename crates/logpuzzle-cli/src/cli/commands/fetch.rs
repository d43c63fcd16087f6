//! Download mode: fetch each URL into the destination directory.

use anyhow::Result;
use logpuzzle_core::config::LogpuzzleConfig;
use logpuzzle_core::fetch::{download_images, CurlRetriever, INDEX_NAME};
use logpuzzle_core::retry::RetryPolicy;
use std::path::Path;

/// Fetch all URLs into `dest_dir` and report the outcome on stdout. Failed
/// URLs are skipped, not fatal.
pub fn run_fetch(urls: &[String], dest_dir: &Path, cfg: &LogpuzzleConfig) -> Result<()> {
    let retriever = CurlRetriever::new(cfg);
    let policy = RetryPolicy::from_config(cfg.retry.as_ref());

    let report = download_images(urls, dest_dir, &retriever, &policy)?;

    println!(
        "saved {} of {} images to {} ({})",
        report.saved.len(),
        urls.len(),
        dest_dir.display(),
        dest_dir.join(INDEX_NAME).display()
    );
    for (url, err) in &report.failed {
        eprintln!("failed: {} ({})", url, err);
    }

    Ok(())
}
