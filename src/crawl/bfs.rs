// src/crawl/bfs.rs
// =============================================================================
// This module implements the breadth-first crawl.
//
// How it works:
// 1. Round 0 fetches the seed URL
// 2. Every page fetched in a round is parsed for links
// 3. Links are resolved and filtered to the page's origin
// 4. The links found in round N are fetched in round N+1
// 5. After round `max_depth` we stop; everything fetched is the result
//
// Within a round pages are fetched concurrently (up to `workers` at once).
// Rounds themselves run one after another, since round N+1 needs the
// complete set of links from round N.
//
// Rust concepts:
// - Generics: the crawler works with any Fetcher and LinkExtractor
// - Streams: buffer_unordered runs many fetches with a concurrency cap
// =============================================================================

use std::collections::HashSet;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};
use url::Url;

use super::filter::filter_same_origin;
use super::origin::Origin;
use super::resolve::resolve_all;
use super::state::CrawlState;
use crate::error::{CrawlError, FetchError};
use crate::extract::LinkExtractor;
use crate::fetch::{FetchedPage, Fetcher};

/// Which origin bounds the links found on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopePolicy {
    /// The origin of the URL the page was finally served from.
    /// A redirect to another site moves the scope with it.
    #[default]
    FinalOrigin,
    /// The origin of the URL we asked for, regardless of redirects.
    RequestedOrigin,
}

/// What to do when a page can't be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and keep crawling
    #[default]
    Continue,
    /// Abort the whole crawl on the first failure
    FailFast,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Number of link hops to follow from the seed (0 = only the seed)
    pub max_depth: usize,
    /// Maximum number of fetches in flight within one round
    pub workers: usize,
    pub scope: ScopePolicy,
    pub on_failure: FailurePolicy,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            workers: 8,
            scope: ScopePolicy::default(),
            on_failure: FailurePolicy::default(),
        }
    }
}

/// A page that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub url: String,
    pub depth: usize,
    pub error: String,
}

/// Everything a finished crawl knows.
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Every URL that was fetched or attempted; this is the sitemap
    pub visited: HashSet<String>,
    /// Pages that failed (they are still in `visited`)
    pub failures: Vec<FetchFailure>,
    /// Links found in the last round that the depth limit kept us from fetching
    pub unexplored: HashSet<String>,
}

// Result of processing one URL of a round
struct PageOutcome {
    url: String,
    result: Result<Vec<String>, FetchError>,
}

pub struct BfsCrawler<F, E> {
    fetcher: F,
    extractor: E,
    config: CrawlConfig,
}

impl<F, E> BfsCrawler<F, E>
where
    F: Fetcher,
    E: LinkExtractor,
{
    pub fn new(fetcher: F, extractor: E, config: CrawlConfig) -> Self {
        Self {
            fetcher,
            extractor,
            config,
        }
    }

    // Crawls from `seed` and returns the report
    //
    // Errors:
    //   InvalidSeed if `seed` isn't an absolute http(s) URL
    //   Fetch if a page fails and the failure policy is FailFast
    pub async fn crawl(&self, seed: &str) -> Result<CrawlReport, CrawlError> {
        validate_seed(seed)?;

        let workers = self.config.workers.max(1);
        info!(
            seed,
            max_depth = self.config.max_depth,
            workers,
            "starting crawl"
        );

        let mut state = CrawlState::new(seed);
        let mut failures = Vec::new();

        for _ in 0..=self.config.max_depth {
            let batch = state.begin_round();
            let depth = state.depth();

            if batch.is_empty() {
                debug!(depth, "nothing left to fetch");
                break;
            }
            info!(depth, pages = batch.len(), "crawling round");

            let mut outcomes = stream::iter(batch)
                .map(|url| self.process(url))
                .buffer_unordered(workers);

            while let Some(outcome) = outcomes.next().await {
                match outcome.result {
                    Ok(links) => {
                        debug!(url = %outcome.url, links = links.len(), "page processed");
                        state.discover(links);
                    }
                    Err(error) => {
                        if self.config.on_failure == FailurePolicy::FailFast {
                            return Err(CrawlError::Fetch {
                                url: outcome.url,
                                source: error,
                            });
                        }
                        warn!(url = %outcome.url, %error, "failed to fetch page");
                        failures.push(FetchFailure {
                            url: outcome.url,
                            depth,
                            error: error.to_string(),
                        });
                    }
                }
            }
        }

        let (visited, unexplored) = state.finish();
        info!(
            visited = visited.len(),
            failed = failures.len(),
            unexplored = unexplored.len(),
            "crawl complete"
        );

        Ok(CrawlReport {
            visited,
            failures,
            unexplored,
        })
    }

    // Fetches one page and returns the same-origin links found on it
    async fn process(&self, url: String) -> PageOutcome {
        let result = match self.fetcher.fetch(&url).await {
            Ok(page) => Ok(self.links_on(&url, &page)),
            Err(error) => Err(error),
        };
        PageOutcome { url, result }
    }

    fn links_on(&self, requested_url: &str, page: &FetchedPage) -> Vec<String> {
        let scope_url = match self.config.scope {
            ScopePolicy::FinalOrigin => page.final_url.as_str(),
            ScopePolicy::RequestedOrigin => requested_url,
        };

        let Some(base) = Origin::parse(scope_url) else {
            warn!(url = scope_url, "page has no origin, ignoring its links");
            return Vec::new();
        };

        let raw_hrefs = self.extractor.extract_hrefs(&page.body);
        let resolved = resolve_all(&raw_hrefs, &base);
        filter_same_origin(resolved, &base)
    }
}

// The seed must be an absolute http(s) URL with a host
fn validate_seed(seed: &str) -> Result<(), CrawlError> {
    let invalid = |reason: String| CrawlError::InvalidSeed {
        url: seed.to_string(),
        reason,
    };

    let parsed = Url::parse(seed).map_err(|e| invalid(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("URL has no host".to_string()));
    }
    Ok(())
}
