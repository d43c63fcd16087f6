//! Token extraction from a single log line.

use regex::Regex;
use std::sync::LazyLock;

/// Marker substring a line must contain to be considered at all.
pub const PUZZLE_MARKER: &str = "puzzle";

/// Whitespace-delimited token containing the marker and ending in an image
/// extension, e.g. `/foo/puzzle-bar-aaab.jpg`.
static PUZZLE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+puzzle\S+\.(?:jpg|jpeg)").unwrap());

/// Extracts the first puzzle token from a log line, or `None` if the line
/// holds no such token. Callers are expected to pre-filter on
/// [`PUZZLE_MARKER`]; this only runs the token pattern.
pub fn extract_token(line: &str) -> Option<&str> {
    PUZZLE_TOKEN_RE.find(line).map(|m| m.as_str())
}
