//! libcurl-backed fetcher for `http(s)://` locators, with filesystem support
//! for `file://` URLs and plain paths.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{CollideError, Result};

use super::{FetchLines, LineReader};

/// Where a locator points once classified.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    Http,
    File(PathBuf),
}

fn classify(locator: &str) -> Result<Target> {
    match url::Url::parse(locator) {
        Ok(u) => match u.scheme() {
            "http" | "https" => Ok(Target::Http),
            "file" => u
                .to_file_path()
                .map(Target::File)
                .map_err(|_| CollideError::unreachable(locator, "invalid file URL")),
            other => Err(CollideError::unreachable(
                locator,
                format!("unsupported scheme {:?}", other),
            )),
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Target::File(PathBuf::from(locator))),
        Err(e) => Err(CollideError::unreachable(locator, e)),
    }
}

/// Blocking fetcher: one GET per `open`, body buffered in memory.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    transfer_timeout: Duration,
}

impl CurlFetcher {
    pub fn new(cfg: &FetchConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            transfer_timeout: Duration::from_secs(cfg.transfer_timeout_secs),
        }
    }

    fn get(&self, url: &str) -> std::result::Result<Vec<u8>, String> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|e| format!("invalid URL: {}", e))?;
        easy.follow_location(true).map_err(|e| e.to_string())?;
        easy.max_redirections(10).map_err(|e| e.to_string())?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(|e| e.to_string())?;
        easy.timeout(self.transfer_timeout)
            .map_err(|e| e.to_string())?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| e.to_string())?;
            transfer
                .perform()
                .map_err(|e| format!("GET failed: {}", e))?;
        }

        let code = easy.response_code().map_err(|e| e.to_string())?;
        if code != 200 {
            return Err(format!("HTTP {}", code));
        }
        Ok(body)
    }

    fn open_file(locator: &str, path: &Path) -> Result<LineReader> {
        let file = File::open(path).map_err(|e| CollideError::unreachable(locator, e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl FetchLines for CurlFetcher {
    fn open(&self, locator: &str) -> Result<LineReader> {
        match classify(locator)? {
            Target::Http => {
                let body = self
                    .get(locator)
                    .map_err(|reason| CollideError::unreachable(locator, reason))?;
                tracing::debug!(locator, bytes = body.len(), "fetched");
                Ok(Box::new(Cursor::new(body)))
            }
            Target::File(path) => Self::open_file(locator, &path),
        }
    }
}
