//! Log scanning: extract puzzle image URLs from an Apache access log.
//!
//! Reads the log line by line, pulls out whitespace-delimited tokens that
//! contain the puzzle marker and end in an image extension, resolves them
//! against the host derived from the log file name, deduplicates, and sorts
//! by the embedded suffix key.

mod pattern;
mod sort_key;

pub use pattern::{extract_token, PUZZLE_MARKER};
pub use sort_key::suffix_key;

use crate::resolve;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to open or read the log file. Individual line misses are not
/// errors; they are skipped.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("log file not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read log file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ScanError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Extracts raw puzzle tokens from the log, one per matching line, in file
/// order. Duplicates are kept; marker lines without an extractable token are
/// skipped.
pub fn extract_tokens(log_path: &Path) -> Result<Vec<String>, ScanError> {
    let file = File::open(log_path).map_err(|e| ScanError::from_io(log_path, e))?;
    let reader = BufReader::new(file);

    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| ScanError::from_io(log_path, e))?;
        if !line.contains(PUZZLE_MARKER) {
            continue;
        }
        match extract_token(&line) {
            Some(token) => tokens.push(token.to_string()),
            None => tracing::debug!("marker line without extractable token: {}", line),
        }
    }
    Ok(tokens)
}

/// Returns the puzzle URLs from the given log file: extracted, resolved
/// against the host embedded in the file name, deduplicated, and sorted
/// ascending by [`suffix_key`].
///
/// Deduplication keeps the first occurrence; the sort is stable, so URLs with
/// equal keys stay in first-occurrence order. Re-running on the same input
/// yields the same sequence.
pub fn read_urls(log_path: &Path) -> Result<Vec<String>, ScanError> {
    let tokens = extract_tokens(log_path)?;
    let host = resolve::host_from_log_filename(log_path);
    if host.is_none() {
        tracing::warn!(
            "no host in log file name {}; path tokens are kept as-is",
            log_path.display()
        );
    }

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for token in tokens {
        let url = resolve::resolve_url(host.as_deref(), &token);
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }

    urls.sort_by(|a, b| suffix_key(a).cmp(suffix_key(b)));
    Ok(urls)
}
