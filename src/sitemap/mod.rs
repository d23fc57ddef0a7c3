// src/sitemap/mod.rs
// =============================================================================
// This module turns the set of visited pages into a sitemap document.
//
// Two formats:
// - XML following the sitemaps.org 0.9 schema (the default)
// - JSON, for scripts that would rather not parse XML
//
// URLs are sorted first so the same crawl always prints the same document.
// =============================================================================

mod xml;

use std::io::Write;

use serde::Serialize;

use crate::error::SiteMapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMap {
    urls: Vec<String>,
}

impl SiteMap {
    pub fn new<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut urls: Vec<String> = pages.into_iter().collect();
        urls.sort();
        urls.dedup();
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, SiteMapError> {
        match format {
            OutputFormat::Xml => xml::render(self),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    // Renders the document and writes it, followed by a newline
    pub fn write_to<W: Write>(&self, mut out: W, format: OutputFormat) -> Result<(), SiteMapError> {
        let document = self.render(format)?;
        writeln!(out, "{}", document)?;
        out.flush()?;
        Ok(())
    }
}
