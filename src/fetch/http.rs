// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP with reqwest.
//
// Key functionality:
// - One shared Client for the whole crawl (connection pooling)
// - A timeout on every request so a slow server can't stall the crawl
// - Redirects are followed, and the final URL is reported back
// - Non-2xx responses count as failures
// =============================================================================

use std::time::Duration;

use reqwest::{redirect, Client};
use tracing::debug;

use super::{FetchedPage, Fetcher};
use crate::error::{CrawlError, FetchError};

// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 10,
            user_agent: concat!("site-mapper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CrawlError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        debug!(url, "fetching");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // response.url() is the last hop of the redirect chain
        let final_url = response.url().to_string();
        if final_url != url {
            debug!(url, final_url = %final_url, "followed redirect");
        }

        let body = response.text().await?;

        Ok(FetchedPage { final_url, body })
    }
}
