pub mod config;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod storage;

pub use extract::{extract, extract_from_text, extract_with, ExtractError, PuzzlePattern};
pub use fetch::{download, download_with, CurlFetcher, FetchError, Fetcher};
