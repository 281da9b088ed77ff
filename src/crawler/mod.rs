//! Crawler module for page discovery and indexing
//!
//! This module contains the core crawling logic, including:
//! - The content provider abstraction and an in-memory page cache
//! - Anchor target extraction
//! - The LIFO crawl frontier
//! - The crawl loop that builds the inverted index and link graph

mod coordinator;
mod extractor;
mod frontier;
mod provider;

pub use coordinator::{CrawlOutput, CrawlStep, Crawler, StopReason};
pub use extractor::{extract_links, Links, ANCHOR_MARKER};
pub use frontier::Frontier;
pub use provider::{ContentProvider, PageCache};

use crate::config::CrawlerConfig;

/// Runs a complete crawl
///
/// Starts from `config.seed` and keeps visiting pages until the frontier is
/// empty or more than `config.max_pages` pages have been visited.
///
/// # Example
///
/// ```
/// use seedrank::config::CrawlerConfig;
/// use seedrank::crawler::{crawl, PageCache, StopReason};
///
/// let pages: PageCache = [
///     ("A", r#"<a href="B">to b</a>"#),
///     ("B", r#"<a href="A">to a</a>"#),
/// ]
/// .into_iter()
/// .collect();
///
/// let output = crawl(&pages, &CrawlerConfig::new("A"));
/// assert_eq!(output.visited, vec!["A", "B"]);
/// assert_eq!(output.stop_reason, StopReason::FrontierExhausted);
/// ```
pub fn crawl<P: ContentProvider>(provider: P, config: &CrawlerConfig) -> CrawlOutput {
    let mut crawler = Crawler::new(provider, config);
    crawler.run();
    crawler.finish()
}
