// src/fetch/mod.rs
// =============================================================================
// This module fetches pages for the crawler.
//
// The crawler only talks to the `Fetcher` trait, so tests can hand it an
// in-memory website instead of a real network. The real implementation
// (`HttpFetcher`) lives in http.rs and uses reqwest.
//
// Rust concepts:
// - Traits: a shared interface several types can implement
// - impl Future in traits: an async method that is also `Send`
// =============================================================================

mod http;

use std::future::Future;

use crate::error::FetchError;

pub use http::{FetcherConfig, HttpFetcher};

/// A successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// The URL the response actually came from, after following redirects
    pub final_url: String,
    /// The response body decoded as text
    pub body: String,
}

// Anything that can turn a URL into a page body
//
// Implementations must follow redirects themselves and report where they
// ended up in `FetchedPage::final_url`.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}
