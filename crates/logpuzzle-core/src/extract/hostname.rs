//! Hostname derivation from the log file name.

use std::path::Path;

/// Last `_`-separated token of the file name (e.g. `animal_code.google.com` → `code.google.com`).
///
/// Only the final path component is considered, so underscores in parent
/// directories never leak into the hostname. A name without `_` is returned whole.
pub fn hostname_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    name.rsplit('_').next().unwrap_or_default().to_string()
}
