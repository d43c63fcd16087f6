//! Index document generation for the downloaded images.

use super::SavedImage;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the generated viewer document.
pub const INDEX_NAME: &str = "index.html";

/// Writes `index.html` into `dest_dir` with one `<img>` tag per saved image,
/// in the given order, referencing each file by its local relative name.
/// Called even for a partially-failed batch so the index stays valid.
pub fn write_index(dest_dir: &Path, saved: &[SavedImage]) -> Result<PathBuf> {
    let mut body = String::new();
    for image in saved {
        body.push_str(&format!("<img src=\"{}\">", image.file_name));
    }
    let html = format!("<html><body>{}</body></html>\n", body);

    let path = dest_dir.join(INDEX_NAME);
    fs::write(&path, html).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
