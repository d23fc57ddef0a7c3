// src/extract/mod.rs
// =============================================================================
// This module pulls raw link targets out of fetched pages.
//
// Extraction returns hrefs exactly as written in the markup. Turning them
// into absolute URLs is the crawler's job (see crawl/resolve.rs).
// =============================================================================

mod html;

pub use html::HtmlLinkExtractor;

// Anything that can list the hyperlink targets in a page body
//
// Must never fail: on malformed input return whatever could be recovered.
pub trait LinkExtractor: Send + Sync {
    fn extract_hrefs(&self, body: &str) -> Vec<String>;
}
