//! Host derivation and URL join policy.
//!
//! The log file name carries the host the log was taken from, after the
//! first underscore (e.g. `apache_code.google.com` → `code.google.com`).
//! Path tokens are joined as `http://<host><path>`; tokens that already
//! parse as absolute http(s) URLs pass through unchanged.

use std::path::Path;
use url::Url;

/// Extracts the host from a log file name: everything after the first `_`.
///
/// Returns `None` when the file name has no `_` or nothing follows it.
pub fn host_from_log_filename(log_path: &Path) -> Option<String> {
    let name = log_path.file_name()?.to_str()?;
    let (_, host) = name.split_once('_')?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

/// Resolves a raw token to a fetchable URL.
///
/// Absolute http(s) tokens are returned as-is. Anything else is treated as a
/// server-relative path and prefixed with `http://<host>`. Without a host the
/// token is returned unchanged so the caller can still print it.
pub fn resolve_url(host: Option<&str>, token: &str) -> String {
    if let Ok(parsed) = Url::parse(token) {
        if matches!(parsed.scheme(), "http" | "https") {
            return token.to_string();
        }
    }
    match host {
        Some(host) => format!("http://{}{}", host, token),
        None => token.to_string(),
    }
}
