//! Puzzle URL extraction from Apache access logs.
//!
//! Scans the log text for puzzle fragments, prefixes each with
//! `http://<hostname>` (hostname taken from the log file name), drops
//! duplicates and orders the result by answer key: the text after the last
//! `-` of each URL.

mod hostname;
mod pattern;

pub use hostname::hostname_from_path;
pub use pattern::{PuzzlePattern, DEFAULT_PUZZLE_PATTERN, LEGACY_PUZZLE_PATTERN};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot read log file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid puzzle pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Sort key: text after the last `-`, or the whole URL when it has none.
pub fn answer_key(url: &str) -> &str {
    match url.rfind('-') {
        Some(i) => &url[i + 1..],
        None => url,
    }
}

/// Ordered, de-duplicated puzzle URLs found in `text`.
///
/// Ties on the answer key fall back to the full URL so the order never
/// depends on where a fragment appeared in the log.
pub fn extract_from_text(text: &str, hostname: &str, pattern: &PuzzlePattern) -> Vec<String> {
    let unique: HashSet<String> = pattern
        .fragments(text)
        .map(|fragment| format!("http://{}{}", hostname, fragment))
        .collect();

    let mut urls: Vec<String> = unique.into_iter().collect();
    urls.sort_by(|a, b| answer_key(a).cmp(answer_key(b)).then_with(|| a.cmp(b)));
    urls
}

/// Reads `log_path` and extracts its puzzle URLs with the built-in grammar.
pub fn extract(log_path: &Path) -> Result<Vec<String>, ExtractError> {
    extract_with(log_path, &PuzzlePattern::default())
}

/// Like `extract` with an explicit grammar.
pub fn extract_with(log_path: &Path, pattern: &PuzzlePattern) -> Result<Vec<String>, ExtractError> {
    let bytes = fs::read(log_path).map_err(|source| ExtractError::Read {
        path: log_path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let hostname = hostname_from_path(log_path);

    let urls = extract_from_text(&text, &hostname, pattern);
    tracing::debug!(
        path = %log_path.display(),
        hostname = %hostname,
        pattern = pattern.as_str(),
        found = urls.len(),
        "extracted puzzle urls"
    );
    Ok(urls)
}
