// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so stdout only ever holds the sitemap)
// 3. Crawl the website breadth-first
// 4. Print the sitemap of every page we reached
// 5. Exit with proper code (0 = sitemap printed, 2 = error)
// =============================================================================

mod cli;
mod crawl;
mod error;
mod extract;
mod fetch;
mod sitemap;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use cli::Cli;
use crawl::BfsCrawler;
use extract::HtmlLinkExtractor;
use fetch::HttpFetcher;
use sitemap::SiteMap;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Crawls the site described by `cli` and writes the sitemap to stdout
async fn run(cli: &Cli) -> Result<i32> {
    let fetcher = HttpFetcher::new(&cli.fetcher_config())?;
    let crawler = BfsCrawler::new(fetcher, HtmlLinkExtractor, cli.crawl_config());

    let report = crawler.crawl(&cli.url).await?;

    for failure in &report.failures {
        warn!(
            url = %failure.url,
            depth = failure.depth,
            error = %failure.error,
            "page left in sitemap without its links"
        );
    }
    if !report.unexplored.is_empty() {
        info!(
            count = report.unexplored.len(),
            "links beyond the depth limit were not crawled"
        );
    }

    let sitemap = SiteMap::new(report.visited);
    sitemap.write_to(std::io::stdout().lock(), cli.output_format())?;

    Ok(0)
}
