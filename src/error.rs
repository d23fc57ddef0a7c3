// src/error.rs
// =============================================================================
// Error types shared by the fetcher, the crawler and the sitemap writer.
//
// We use `thiserror` for these enums so each failure has a clear message,
// and `anyhow` only at the very top (main.rs) where all we do is print it.
//
// Failure kinds:
// - FetchError: one page could not be fetched (network or HTTP status)
// - CrawlError: the crawl as a whole could not run or was aborted
// - SiteMapError: the result could not be serialized or written
// =============================================================================

use thiserror::Error;

/// Why a single page could not be fetched.
///
/// Holds plain strings instead of the underlying reqwest error so that
/// failures can be cloned into the crawl report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request did not complete within the client timeout
    #[error("request timed out")]
    Timeout,
    /// The redirect chain was longer than the client allows
    #[error("too many redirects")]
    TooManyRedirects,
    /// DNS, TCP or TLS failure before a response arrived
    #[error("connection failed: {0}")]
    Connect(String),
    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),
    /// Anything else (bad URL, body decoding, ...)
    #[error("request failed: {0}")]
    Request(String),
}

// Classifies a reqwest error the same way we report it to the user
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_redirect() {
            FetchError::TooManyRedirects
        } else if error.is_connect() {
            FetchError::Connect(error.to_string())
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(error.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    /// Only produced when the crawl runs with FailurePolicy::FailFast
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
pub enum SiteMapError {
    #[error("XML serialization failed: {0}")]
    Xml(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not write sitemap: {0}")]
    Io(#[from] std::io::Error),
}
