//! Sequential image download and index page generation.
//!
//! URL N of the ordered list is saved as `img<N>` and becomes the Nth `<img>`
//! tag of `index.html`. Downloads run one at a time in list order; the first
//! failure aborts the run.

mod http;
mod error;

pub use http::CurlFetcher;
pub use error::FetchError;

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Name of the generated viewer page.
pub const INDEX_FILE: &str = "index.html";

/// Retrieves one URL into a local file.
pub trait Fetcher {
    /// Fetch `url` and store its body at `dest`. Returns the number of bytes written.
    fn fetch_to(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

/// Local file name for the image at position `n`.
pub fn image_file_name(n: usize) -> String {
    format!("img{}", n)
}

/// Viewer page with one unquoted `<img src=imgN>` per image, in order.
pub fn index_html(count: usize) -> String {
    let mut html = String::from("<html><body>");
    for n in 0..count {
        html.push_str(&format!("<img src={}>", image_file_name(n)));
    }
    html.push_str("</body></html>\n");
    html
}

/// Downloads `urls` into `dest_dir` with a default [`CurlFetcher`].
pub fn download(urls: &[String], dest_dir: &Path) -> Result<()> {
    download_with(&CurlFetcher::default(), urls, dest_dir)
}

/// Downloads `urls` into `dest_dir` in order, then writes `index.html`.
///
/// Creates `dest_dir` if it is missing (parents must exist). Files left over
/// from earlier runs are not removed.
pub fn download_with<F: Fetcher + ?Sized>(fetcher: &F, urls: &[String], dest_dir: &Path) -> Result<()> {
    ensure_dir(dest_dir)?;

    for (n, url) in urls.iter().enumerate() {
        let dest = dest_dir.join(image_file_name(n));
        tracing::info!("fetching {} -> {}", url, dest.display());
        fetcher
            .fetch_to(url, &dest)
            .with_context(|| format!("image {} of {}", n, urls.len()))?;
    }

    let index_path = dest_dir.join(INDEX_FILE);
    fs::write(&index_path, index_html(urls.len()))
        .with_context(|| format!("failed to write {}", index_path.display()))?;
    tracing::info!(images = urls.len(), "wrote {}", index_path.display());
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => {
            tracing::debug!("created {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(e).with_context(|| format!("failed to create directory {}", dir.display())),
    }
}
