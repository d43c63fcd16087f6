//! Image fetching: retrieve each puzzle URL into sequentially-named local
//! files and emit an HTML index.
//!
//! A failed URL is retried per policy, then logged and skipped; it never
//! aborts the batch and never appears in the index.

mod error;
mod index;
mod retriever;

pub use error::FetchError;
pub use index::{write_index, INDEX_NAME};
pub use retriever::{CurlRetriever, Retriever};

use crate::retry::{run_with_retry, RetryPolicy};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One successfully downloaded image.
#[derive(Debug, Clone)]
pub struct SavedImage {
    /// Position of the URL in the input sequence (drives the file name).
    pub index: usize,
    /// Source URL.
    pub url: String,
    /// Local file name inside the destination directory, e.g. `img0.jpg`.
    pub file_name: String,
}

/// Outcome of a fetch batch. Failures keep their source URL so the caller
/// can report them.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub saved: Vec<SavedImage>,
    pub failed: Vec<(String, FetchError)>,
}

/// Local extension for an image URL: `jpeg` when the URL ends that way,
/// otherwise `jpg`.
fn image_extension(url: &str) -> &'static str {
    if url.to_ascii_lowercase().ends_with(".jpeg") {
        "jpeg"
    } else {
        "jpg"
    }
}

/// Downloads `urls` in order into `dest_dir` as `img{i}.{ext}` and writes an
/// [`INDEX_NAME`] document referencing the successful ones.
///
/// The directory is created recursively; creation failure is fatal. Files
/// already present in `dest_dir` are left alone, only new ones are added.
pub fn download_images(
    urls: &[String],
    dest_dir: &Path,
    retriever: &dyn Retriever,
    policy: &RetryPolicy,
) -> Result<FetchReport> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("create destination directory {}", dest_dir.display()))?;

    let mut report = FetchReport::default();
    for (i, url) in urls.iter().enumerate() {
        let file_name = format!("img{}.{}", i, image_extension(url));
        let result = run_with_retry(policy, || {
            let bytes = retriever.retrieve(url)?;
            fs::write(dest_dir.join(&file_name), &bytes).map_err(FetchError::Io)?;
            Ok(bytes.len())
        });
        match result {
            Ok(len) => {
                tracing::info!("saved {} ({} bytes) as {}", url, len, file_name);
                report.saved.push(SavedImage {
                    index: i,
                    url: url.clone(),
                    file_name,
                });
            }
            Err(e) => {
                tracing::warn!("failed to fetch {}: {}", url, e);
                report.failed.push((url.clone(), e));
            }
        }
    }

    write_index(dest_dir, &report.saved)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_follows_url() {
        assert_eq!(image_extension("http://e.com/puzzle-aaab.jpg"), "jpg");
        assert_eq!(image_extension("http://e.com/puzzle-aaab.jpeg"), "jpeg");
        assert_eq!(image_extension("http://e.com/puzzle-AAAB.JPEG"), "jpeg");
    }
}
