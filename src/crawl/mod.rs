// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling in depth-bounded rounds
// - Same-origin restriction (scheme, host and port must all match)
// - Concurrent fetching within a round, with a worker limit
// - Failed pages are recorded instead of stopping the crawl
//
// Submodules:
// - origin:  the (scheme, host, port) identity of a URL
// - resolve: raw href -> absolute URL
// - filter:  drop links that leave the site
// - state:   visited / frontier bookkeeping
// - bfs:     the crawler that ties it all together
// =============================================================================

mod bfs;
mod filter;
mod origin;
mod resolve;
mod state;

pub use bfs::{BfsCrawler, CrawlConfig, FailurePolicy, ScopePolicy};
