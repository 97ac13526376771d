//! Blocking single GET per image via libcurl.

use std::path::Path;
use std::time::Duration;

use super::{FetchError, Fetcher};
use crate::config::HttpConfig;
use crate::storage::PartFile;

/// libcurl-backed fetcher. One `Easy` handle per image, no retries.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    max_redirections: u32,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::from_config(&HttpConfig::default())
    }
}

impl CurlFetcher {
    pub fn from_config(cfg: &HttpConfig) -> Self {
        Self {
            max_redirections: cfg.max_redirections,
            connect_timeout: cfg.connect_timeout(),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch_to(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let curl_err = |source: curl::Error| FetchError::Curl {
            url: url.to_string(),
            source,
        };
        let io_err = |source: std::io::Error| FetchError::Io {
            path: dest.to_path_buf(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(parsed.as_str()).map_err(curl_err)?;
        easy.follow_location(true).map_err(curl_err)?;
        easy.max_redirections(self.max_redirections).map_err(curl_err)?;
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t).map_err(curl_err)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua).map_err(curl_err)?;
        }

        let mut part = PartFile::create(dest).map_err(io_err)?;
        let mut write_failure: Option<std::io::Error> = None;
        // Any failure from here on must remove the part file, so no early returns.
        let performed = {
            let mut transfer = easy.transfer();
            let result = transfer
                .write_function(|data| match part.write_all(data) {
                    Ok(()) => Ok(data.len()),
                    Err(e) => {
                        write_failure = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .and_then(|()| transfer.perform());
            result
        };

        let status = performed.and_then(|()| easy.response_code());
        let failure = match status {
            Err(e) => Some(match write_failure {
                Some(io) => io_err(io),
                None => curl_err(e),
            }),
            Ok(code) if matches!(parsed.scheme(), "http" | "https") && !(200..300).contains(&code) => {
                Some(FetchError::Http {
                    url: url.to_string(),
                    status: code,
                })
            }
            Ok(_) => None,
        };
        if let Some(err) = failure {
            let _ = std::fs::remove_file(part.temp_path());
            return Err(err);
        }

        let written = part.finalize().map_err(io_err)?;
        tracing::debug!(url, bytes = written, path = %dest.display(), "fetched image");
        Ok(written)
    }
}
