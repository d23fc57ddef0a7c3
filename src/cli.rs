// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct below *is* the CLI, and clap
// generates the parsing, --help and --version output from it.
//
// The CLI is also where configuration comes from, so this file knows how
// to turn the parsed flags into the crawler and fetcher configs.
// =============================================================================

use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use crate::crawl::{CrawlConfig, FailurePolicy, ScopePolicy};
use crate::fetch::FetcherConfig;
use crate::sitemap::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a website breadth-first and print its sitemap",
    long_about = "site-mapper starts at a URL, follows same-origin links up to a maximum depth, \
                  and prints every page it reached as a sitemaps.org XML document."
)]
pub struct Cli {
    /// URL to start crawling from (must be http or https)
    #[arg(long, default_value = "https://example.com")]
    pub url: String,

    /// Maximum number of links deep to traverse
    ///
    /// Depth 0 = just the starting page
    /// Depth 1 = starting page + all pages it links to
    /// etc.
    #[arg(long, default_value_t = 3)]
    pub depth: usize,

    /// Maximum number of pages fetched at the same time
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Which origin limits the links followed from a redirected page
    #[arg(long, value_enum, default_value_t = Scope::Final)]
    pub scope: Scope,

    /// Stop at the first page that can't be fetched (no sitemap is printed)
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the sitemap as JSON instead of XML
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Links must match the origin the page was finally served from
    Final,
    /// Links must match the origin that was requested, even after a redirect
    Requested,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_depth: self.depth,
            workers: usize::from(self.workers),
            scope: match self.scope {
                Scope::Final => ScopePolicy::FinalOrigin,
                Scope::Requested => ScopePolicy::RequestedOrigin,
            },
            on_failure: if self.fail_fast {
                FailurePolicy::FailFast
            } else {
                FailurePolicy::Continue
            },
        }
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            timeout: Duration::from_secs(self.timeout),
            ..FetcherConfig::default()
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Xml
        }
    }

    // Warnings by default so stdout/stderr stay quiet on a clean run
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
