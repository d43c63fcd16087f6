//! HTTP retrieval of a single image body.

use super::FetchError;
use crate::config::LogpuzzleConfig;
use std::time::Duration;

/// Retrieval capability: one URL in, full body out. The fetch loop only
/// depends on this, so tests can substitute a fake without touching the
/// network.
pub trait Retriever {
    fn retrieve(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Curl-backed retriever: single GET per image, redirects followed, bounded
/// connect and total timeouts.
pub struct CurlRetriever {
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl CurlRetriever {
    pub fn new(cfg: &LogpuzzleConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }
}

impl Retriever for CurlRetriever {
    fn retrieve(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(FetchError::Curl)?;
        easy.follow_location(true).map_err(FetchError::Curl)?;
        easy.max_redirections(10).map_err(FetchError::Curl)?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(FetchError::Curl)?;
        easy.timeout(self.request_timeout).map_err(FetchError::Curl)?;

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(FetchError::Curl)?;
            transfer.perform().map_err(FetchError::Curl)?;
        }

        let code = easy.response_code().map_err(FetchError::Curl)?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(body)
    }
}
